use crate::domain::model::ListEntry;
use crate::domain::ports::{Storage, TableCatalog};
use crate::utils::error::{Result, ToolError};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_DONE_MARKER: &str = "DONE";

/// 解析清單並依資料庫內容加上完成標記
#[derive(Debug, Clone)]
pub struct CompletionMarker {
    marker: String,
    pattern: Regex,
}

impl CompletionMarker {
    pub fn new(marker: &str) -> Result<Self> {
        // 已經標記過的行也要能解析，重跑時標記會依資料庫重新計算
        let source = format!(r"^\s*(?:{}\s+)?(\d+)\.\s*(.+)$", regex::escape(marker));
        let pattern = Regex::new(&source).map_err(|e| ToolError::InvalidConfigValueError {
            field: "marker.done".to_string(),
            value: marker.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            marker: marker.to_string(),
            pattern,
        })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn parse_entries(&self, text: &str) -> Vec<ListEntry> {
        let mut entries = Vec::new();

        for line in text.lines() {
            let Some(caps) = self.pattern.captures(line) else {
                continue;
            };

            entries.push(ListEntry {
                index: normalize_index(&caps[1]),
                name: caps[2].to_string(),
            });
        }

        entries
    }

    pub fn mark(&self, entries: Vec<ListEntry>, tables: &HashSet<String>) -> MarkOutcome {
        let entries: Vec<MarkedEntry> = entries
            .into_iter()
            .map(|entry| {
                let done = tables.contains(&entry.name);
                MarkedEntry { entry, done }
            })
            .collect();
        let done_count = entries.iter().filter(|e| e.done).count();

        MarkOutcome {
            entries,
            done_count,
        }
    }

    pub fn render(&self, outcome: &MarkOutcome) -> String {
        let lines: Vec<String> = outcome
            .entries
            .iter()
            .map(|e| {
                if e.done {
                    format!("{} {:>5}. {}", self.marker, e.entry.index, e.entry.name)
                } else {
                    format!("{:>5}. {}", e.entry.index, e.entry.name)
                }
            })
            .collect();

        lines.join("\n") + "\n"
    }
}

/// 序號保留原本的數字字串，只去掉前導的 0，任何長度都不會失敗
fn normalize_index(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

impl Default for CompletionMarker {
    fn default() -> Self {
        Self::new(DEFAULT_DONE_MARKER).expect("default marker is a valid pattern")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedEntry {
    pub entry: ListEntry,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkOutcome {
    pub entries: Vec<MarkedEntry>,
    pub done_count: usize,
}

#[derive(Debug, Clone)]
pub struct MarkReport {
    pub table_count: usize,
    pub total: usize,
    pub done: usize,
    pub marker: String,
    pub output_path: PathBuf,
    pub rendered: String,
    pub dry_run: bool,
}

impl MarkReport {
    pub fn remaining(&self) -> usize {
        self.total - self.done
    }
}

impl fmt::Display for MarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} tables in database", self.table_count)?;
        writeln!(f, "Found {} entries in list", self.total)?;
        if self.dry_run {
            writeln!(f, "Dry run, not written to: {}", self.output_path.display())?;
        } else {
            writeln!(f, "Written to: {}", self.output_path.display())?;
        }
        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "  Total entries: {}", self.total)?;
        writeln!(f, "  Done ({}): {}", self.marker, self.done)?;
        write!(f, "  Remaining: {}", self.remaining())
    }
}

/// 讀取資料表名稱、標記清單，並覆寫原檔
pub fn run_mark_done<S: Storage, C: TableCatalog>(
    storage: &S,
    catalog: &C,
    marker: &CompletionMarker,
    list_path: &Path,
    dry_run: bool,
) -> Result<MarkReport> {
    let tables = catalog.table_names()?;
    tracing::debug!("Catalog returned {} table names", tables.len());

    let text = storage.read_text(list_path)?;
    let entries = marker.parse_entries(&text);
    tracing::debug!("Parsed {} entries from {}", entries.len(), list_path.display());

    let total = entries.len();
    let outcome = marker.mark(entries, &tables);
    let rendered = marker.render(&outcome);

    if !dry_run {
        storage.write_text(list_path, &rendered)?;
    }

    Ok(MarkReport {
        table_count: tables.len(),
        total,
        done: outcome.done_count,
        marker: marker.marker().to_string(),
        output_path: storage.resolve(list_path),
        rendered,
        dry_run,
    })
}
