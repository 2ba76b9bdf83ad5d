use clap::Parser;
use datatable_tools::app::commands;
use datatable_tools::config::RerankArgs;
use datatable_tools::utils::logger;

#[derive(Parser)]
#[command(name = "rerank-headers")]
#[command(about = "Renumber \"### N. **Title**\" headings in a markdown file")]
struct Cli {
    #[command(flatten)]
    args: RerankArgs,
}

// 失敗時只印訊息，結束碼仍為 0
fn main() {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.args.verbose);

    commands::rerank(&cli.args);
}
