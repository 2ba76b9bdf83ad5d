use crate::core::completion_marker::DEFAULT_DONE_MARKER;
use crate::utils::error::{Result, ToolError};
use crate::utils::validation::{validate_marker, validate_path, Validate};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "datatable-tools.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub paths: PathsConfig,
    pub marker: MarkerConfig,
}

/// 專案內的固定檔案位置，相對路徑以 root 為基準
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub root: String,
    pub list_file: String,
    pub filtered_file: String,
    pub database: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            list_file: "docs/datatable-list.txt".to_string(),
            filtered_file: "docs/datatable-list-filtered.txt".to_string(),
            database: "tests/ast.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub done: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            done: DEFAULT_DONE_MARKER.to_string(),
        }
    }
}

impl ToolsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ToolError::io(path, e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: ToolsConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// 明確指定的設定檔必須存在；預設位置找不到時使用內建值
    pub fn load(explicit: Option<&Path>, search_root: &Path) -> Result<Self> {
        let config = match explicit {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(path)?
            }
            None => {
                let candidate = search_root.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    tracing::debug!("Loading config from {}", candidate.display());
                    Self::from_file(&candidate)?
                } else {
                    tracing::debug!("No {} found, using defaults", candidate.display());
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn root(&self) -> PathBuf {
        PathBuf::from(&self.paths.root)
    }

    pub fn list_file(&self) -> &Path {
        Path::new(&self.paths.list_file)
    }

    pub fn filtered_file(&self) -> &Path {
        Path::new(&self.paths.filtered_file)
    }

    pub fn database(&self) -> &Path {
        Path::new(&self.paths.database)
    }
}

impl Validate for ToolsConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.root", &self.paths.root)?;
        validate_path("paths.list_file", &self.paths.list_file)?;
        validate_path("paths.filtered_file", &self.paths.filtered_file)?;
        validate_path("paths.database", &self.paths.database)?;
        validate_marker("marker.done", &self.marker.done)?;
        Ok(())
    }
}
