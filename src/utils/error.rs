use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid config value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ToolError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ToolError::IoError {
            path: path.into(),
            source,
        }
    }

    /// 給操作者看的一行訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolError::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("File not found: {}", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: {}", path.display())
                }
                _ => format!("Could not access {}: {}", path.display(), source),
            },
            ToolError::DatabaseError(e) => format!("Could not read the table catalog: {}", e),
            ToolError::ConfigParseError(e) => format!("Config file is not valid TOML: {}", e),
            ToolError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config value '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
