use crate::adapters::{LocalStorage, SqliteCatalog};
use crate::config::{Command, CountArgs, FilterArgs, MarkDoneArgs, ProjectArgs, RerankArgs, ToolsConfig};
use crate::core::completion_marker::{run_mark_done, CompletionMarker};
use crate::core::header_renumber::run_renumber;
use crate::core::list_filter::run_filter;
use crate::core::table_counter::run_count;
use crate::utils::error::ToolError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// 載入設定並決定專案根目錄；命令列的 --root 優先於設定檔
fn load_project(args: &ProjectArgs) -> Result<(ToolsConfig, PathBuf)> {
    let search_root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = ToolsConfig::load(args.config.as_deref(), &search_root)
        .context("Failed to load configuration")?;
    let root = args.root.clone().unwrap_or_else(|| config.root());

    tracing::debug!("Project root: {}", root.display());
    Ok((config, root))
}

pub fn filter(args: &FilterArgs) -> Result<()> {
    let (config, root) = load_project(&args.project)?;
    let storage = LocalStorage::new(root);

    let report = run_filter(
        &storage,
        config.list_file(),
        config.filtered_file(),
        args.project.dry_run,
    )?;

    if report.dry_run {
        print!("{}", report.rendered);
    }
    println!("{}", report);
    Ok(())
}

pub fn mark_done(args: &MarkDoneArgs) -> Result<()> {
    let (config, root) = load_project(&args.project)?;
    let storage = LocalStorage::new(&root);
    let catalog = SqliteCatalog::new(root.join(config.database()));
    let marker = CompletionMarker::new(&config.marker.done)?;

    println!("Reading tables from: {}", catalog.db_path().display());
    println!("Parsing: {}", root.join(config.list_file()).display());

    let report = run_mark_done(
        &storage,
        &catalog,
        &marker,
        config.list_file(),
        args.project.dry_run,
    )?;

    if report.dry_run {
        print!("{}", report.rendered);
    }
    println!("{}", report);
    Ok(())
}

pub fn count(args: &CountArgs) -> Result<()> {
    let storage = LocalStorage::new(".");
    let report = run_count(&storage, &args.file_path)?;

    println!("{}", report);
    if args.list && report.total() > 0 {
        println!("{}", report.listing());
    }
    Ok(())
}

/// 讀寫失敗只印出訊息，不回傳錯誤
pub fn rerank(args: &RerankArgs) {
    let storage = LocalStorage::new(".");
    let output: Option<&Path> = args.output_file.as_deref();

    match run_renumber(&storage, &args.input_file, output, args.dry_run) {
        Ok(report) => {
            if report.dry_run {
                print!("{}", report.rendered);
            }
            println!("{}", report);
        }
        Err(e) => {
            tracing::error!("Renumbering {} failed: {:?}", args.input_file.display(), e);
            println!("{}", e);
        }
    }
}

pub fn dispatch(command: &Command) -> Result<()> {
    match command {
        Command::Filter(args) => filter(args),
        Command::MarkDone(args) => mark_done(args),
        Command::Count(args) => count(args),
        Command::Rerank(args) => {
            rerank(args);
            Ok(())
        }
    }
}

/// 錯誤鏈中有 ToolError 時用它的友善訊息，否則用最外層的描述
pub fn failure_message(err: &anyhow::Error) -> String {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ToolError>())
        .map(ToolError::user_friendly_message)
        .unwrap_or_else(|| err.to_string())
}

/// 失敗時把一行訊息印到 stderr，並以非 0 結束
pub fn finish(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("❌ Command failed: {:?}", e);
            eprintln!("❌ {}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
