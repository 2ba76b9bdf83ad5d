use clap::{Args, Subcommand};
use std::path::PathBuf;

/// 使用固定專案路徑的工具共用的參數
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Project root that the fixed docs/ and tests/ paths are resolved against
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Path to a TOML config file (default: <root>/datatable-tools.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the output instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Debug, Clone, Args)]
pub struct MarkDoneArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Debug, Clone, Args)]
pub struct CountArgs {
    /// Path to the dbscheme file
    pub file_path: PathBuf,

    /// Print every table name found
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RerankArgs {
    /// Markdown file to renumber
    pub input_file: PathBuf,

    /// Where to write the result (default: overwrite the input)
    pub output_file: Option<PathBuf>,

    /// Print the output instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Drop '@' entries from the datatable list and renumber the rest
    Filter(FilterArgs),

    /// Mark list entries that already exist as tables in the database
    MarkDone(MarkDoneArgs),

    /// Count table declarations in a dbscheme file
    Count(CountArgs),

    /// Renumber "### N. **Title**" headings in a markdown file
    Rerank(RerankArgs),
}

impl Command {
    pub fn verbose(&self) -> bool {
        match self {
            Command::Filter(args) => args.project.verbose,
            Command::MarkDone(args) => args.project.verbose,
            Command::Count(args) => args.verbose,
            Command::Rerank(args) => args.verbose,
        }
    }
}
