use clap::Parser;
use datatable_tools::app::commands;
use datatable_tools::config::CountArgs;
use datatable_tools::utils::logger;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "count-tables")]
#[command(about = "Count the table declarations in a dbscheme file")]
struct Cli {
    #[command(flatten)]
    args: CountArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.args.verbose);

    commands::finish(commands::count(&cli.args))
}
