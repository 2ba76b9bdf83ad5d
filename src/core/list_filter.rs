use crate::domain::ports::Storage;
use crate::utils::error::Result;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)\.\s*(.+)$").expect("entry pattern is valid"))
}

/// 名稱以此開頭的項目會被移除
pub const EXCLUDED_PREFIX: char = '@';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// 輸入的總行數，包含不符合格式的行
    pub original_lines: usize,
    pub removed: usize,
    pub remaining: Vec<String>,
}

/// 不符合 `<index>. <name>` 的行直接丟棄
pub fn filter_entries(text: &str) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for line in text.lines() {
        outcome.original_lines += 1;

        let Some(caps) = entry_pattern().captures(line) else {
            continue;
        };

        let name = &caps[2];
        if name.starts_with(EXCLUDED_PREFIX) {
            outcome.removed += 1;
        } else {
            outcome.remaining.push(name.to_string());
        }
    }

    outcome
}

/// 從 1 開始重新編號，序號右對齊寬度 5，結尾保證有換行
pub fn render(outcome: &FilterOutcome) -> String {
    let lines: Vec<String> = outcome
        .remaining
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>5}. {}", i + 1, name))
        .collect();

    lines.join("\n") + "\n"
}

#[derive(Debug, Clone)]
pub struct FilterReport {
    pub original_lines: usize,
    pub removed: usize,
    pub remaining: usize,
    pub output_path: PathBuf,
    pub rendered: String,
    pub dry_run: bool,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original entries: {}", self.original_lines)?;
        writeln!(
            f,
            "Removed entries (starting with {}): {}",
            EXCLUDED_PREFIX, self.removed
        )?;
        writeln!(f, "Remaining entries: {}", self.remaining)?;
        if self.dry_run {
            write!(f, "Dry run, not written to: {}", self.output_path.display())
        } else {
            write!(f, "Output written to: {}", self.output_path.display())
        }
    }
}

pub fn run_filter<S: Storage>(
    storage: &S,
    input: &Path,
    output: &Path,
    dry_run: bool,
) -> Result<FilterReport> {
    let text = storage.read_text(input)?;
    let outcome = filter_entries(&text);
    let rendered = render(&outcome);

    tracing::debug!(
        "Filtered {}: {} removed, {} kept",
        input.display(),
        outcome.removed,
        outcome.remaining.len()
    );

    if !dry_run {
        storage.write_text(output, &rendered)?;
    }

    Ok(FilterReport {
        original_lines: outcome.original_lines,
        removed: outcome.removed,
        remaining: outcome.remaining.len(),
        output_path: storage.resolve(output),
        rendered,
        dry_run,
    })
}
