#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Command, CountArgs, FilterArgs, MarkDoneArgs, ProjectArgs, RerankArgs};
pub use toml_config::ToolsConfig;
