use clap::Parser;
use datatable_tools::app::commands;
use datatable_tools::config::FilterArgs;
use datatable_tools::utils::logger;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "filter-datatables")]
#[command(about = "Drop '@' entries from docs/datatable-list.txt and renumber the rest")]
struct Cli {
    #[command(flatten)]
    args: FilterArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.args.project.verbose);

    commands::finish(commands::filter(&cli.args))
}
