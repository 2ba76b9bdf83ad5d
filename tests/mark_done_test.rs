use anyhow::Result;
use datatable_tools::core::completion_marker::run_mark_done;
use datatable_tools::{CompletionMarker, LocalStorage, SqliteCatalog};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn setup_project(tables: &[&str], list: &str) -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_path_buf();
    std::fs::create_dir_all(root.join("docs"))?;
    std::fs::create_dir_all(root.join("tests"))?;

    let conn = Connection::open(root.join("tests/ast.db"))?;
    for table in tables {
        conn.execute_batch(&format!("CREATE TABLE \"{}\" (id INTEGER PRIMARY KEY);", table))?;
    }
    drop(conn);

    std::fs::write(root.join("docs/datatable-list.txt"), list)?;
    Ok((temp_dir, root))
}

/// 測試資料庫中已存在的表會被標記為完成
#[test]
fn test_mark_done_against_sqlite() -> Result<()> {
    let (_temp, root) = setup_project(&["foo", "baz"], "1. foo\n2. bar\n3. baz\n")?;

    let storage = LocalStorage::new(&root);
    let catalog = SqliteCatalog::new(root.join("tests/ast.db"));
    let marker = CompletionMarker::default();
    let report = run_mark_done(
        &storage,
        &catalog,
        &marker,
        Path::new("docs/datatable-list.txt"),
        false,
    )?;

    assert_eq!(report.table_count, 2);
    assert_eq!(report.total, 3);
    assert_eq!(report.done, 2);
    assert_eq!(report.remaining(), 1);

    let written = std::fs::read_to_string(root.join("docs/datatable-list.txt"))?;
    assert_eq!(written, "DONE     1. foo\n    2. bar\nDONE     3. baz\n");

    let summary = report.to_string();
    assert!(summary.contains("Total entries: 3"));
    assert!(summary.contains("Done (DONE): 2"));
    assert!(summary.contains("Remaining: 1"));
    Ok(())
}

/// 測試重複執行結果相同
#[test]
fn test_mark_done_is_idempotent() -> Result<()> {
    let (_temp, root) = setup_project(&["function", "type"], "  1. function\n  2. stmt\n  3. type\n")?;

    let storage = LocalStorage::new(&root);
    let catalog = SqliteCatalog::new(root.join("tests/ast.db"));
    let marker = CompletionMarker::default();
    let list = Path::new("docs/datatable-list.txt");

    run_mark_done(&storage, &catalog, &marker, list, false)?;
    let first = std::fs::read_to_string(root.join(list))?;

    let report = run_mark_done(&storage, &catalog, &marker, list, false)?;
    let second = std::fs::read_to_string(root.join(list))?;

    assert_eq!(first, second);
    assert_eq!(report.total, 3);
    assert_eq!(report.done, 2);
    Ok(())
}

#[test]
fn test_mark_done_missing_database_leaves_list_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    std::fs::create_dir_all(root.join("docs"))?;
    std::fs::write(root.join("docs/datatable-list.txt"), "1. foo\n")?;

    let storage = LocalStorage::new(root);
    let catalog = SqliteCatalog::new(root.join("tests/ast.db"));
    let result = run_mark_done(
        &storage,
        &catalog,
        &CompletionMarker::default(),
        Path::new("docs/datatable-list.txt"),
        false,
    );

    assert!(result.is_err());
    assert_eq!(
        std::fs::read_to_string(root.join("docs/datatable-list.txt"))?,
        "1. foo\n"
    );
    Ok(())
}

#[test]
fn test_mark_done_dry_run() -> Result<()> {
    let (_temp, root) = setup_project(&["foo"], "1. foo\n")?;

    let storage = LocalStorage::new(&root);
    let catalog = SqliteCatalog::new(root.join("tests/ast.db"));
    let report = run_mark_done(
        &storage,
        &catalog,
        &CompletionMarker::default(),
        Path::new("docs/datatable-list.txt"),
        true,
    )?;

    assert_eq!(report.rendered, "DONE     1. foo\n");
    assert_eq!(
        std::fs::read_to_string(root.join("docs/datatable-list.txt"))?,
        "1. foo\n"
    );
    Ok(())
}
