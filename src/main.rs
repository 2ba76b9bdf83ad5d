use clap::Parser;
use datatable_tools::app::commands;
use datatable_tools::config::Command;
use datatable_tools::utils::logger;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "datatable-tools")]
#[command(about = "Maintenance tools for the datatable checklist and dbscheme docs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.command.verbose());
    tracing::debug!("Command: {:?}", cli.command);

    commands::finish(commands::dispatch(&cli.command))
}
