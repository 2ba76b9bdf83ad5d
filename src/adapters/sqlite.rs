use crate::domain::ports::TableCatalog;
use crate::utils::error::Result;
use rusqlite::{Connection, OpenFlags};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const TABLE_NAMES_QUERY: &str = "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name";

/// 從 SQLite 的 sqlite_master 讀取資料表名稱
#[derive(Debug, Clone)]
pub struct SqliteCatalog {
    db_path: PathBuf,
}

impl SqliteCatalog {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl TableCatalog for SqliteCatalog {
    fn table_names(&self) -> Result<HashSet<String>> {
        // 唯讀開啟，檔案不存在時直接報錯而不是建立空資料庫
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let mut stmt = conn.prepare(TABLE_NAMES_QUERY)?;
        let tables = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<HashSet<_>>>()?;

        tracing::debug!(
            "Found {} tables in {}",
            tables.len(),
            self.db_path.display()
        );
        Ok(tables)
    }
}
