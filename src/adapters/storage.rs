use crate::domain::ports::Storage;
use crate::utils::error::{Result, ToolError};
use std::fs;
use std::path::{Path, PathBuf};

/// 以 base_path 為根目錄的本機檔案存取；絕對路徑會直接使用
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        fs::read_to_string(&full_path).map_err(|e| ToolError::io(full_path, e))
    }

    fn write_text(&self, path: &Path, data: &str) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ToolError::io(parent, e))?;
            }
        }

        tracing::debug!("Writing {} bytes to {}", data.len(), full_path.display());
        fs::write(&full_path, data).map_err(|e| ToolError::io(full_path, e))
    }
}
