use crate::utils::error::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// 回傳實際存取的路徑，報表會印出它
    fn resolve(&self, path: &Path) -> PathBuf;
    fn read_text(&self, path: &Path) -> Result<String>;
    fn write_text(&self, path: &Path, data: &str) -> Result<()>;
}

/// 參考資料庫中已存在的資料表名稱
pub trait TableCatalog {
    fn table_names(&self) -> Result<HashSet<String>>;
}

impl TableCatalog for HashSet<String> {
    fn table_names(&self) -> Result<HashSet<String>> {
        Ok(self.clone())
    }
}
