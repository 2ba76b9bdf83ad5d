pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{LocalStorage, SqliteCatalog};
pub use config::ToolsConfig;
pub use core::completion_marker::CompletionMarker;
pub use utils::error::{Result, ToolError};
