use clap::Parser;
use datatable_tools::app::commands;
use datatable_tools::config::MarkDoneArgs;
use datatable_tools::utils::logger;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mark-done")]
#[command(about = "Mark datatable list entries that exist as tables in tests/ast.db")]
struct Cli {
    #[command(flatten)]
    args: MarkDoneArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.args.project.verbose);

    commands::finish(commands::mark_done(&cli.args))
}
