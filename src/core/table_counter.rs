//! Counts table declarations in a dbscheme-style file.
//!
//! Two line shapes are recognised once the line is trimmed:
//! `name(` and `@name = ...`. Lines inside `/* ... */` blocks are skipped
//! using a single in-comment flag. A line carrying both `/*` and `*/`
//! opens and then closes the block and is itself skipped.

use crate::domain::model::{Declaration, DeclarationKind};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn call_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z_]+\s*\(").expect("call pattern is valid"))
}

fn annotated_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^@[a-zA-Z_]+").expect("annotated pattern is valid"))
}

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

pub fn count_tables(text: &str) -> Vec<Declaration> {
    let mut tables = Vec::new();
    let mut in_comment = false;

    for raw in text.lines() {
        let line = raw.trim();

        if line.contains(COMMENT_OPEN) {
            in_comment = true;
        }

        // 結束註解的那一行本身也跳過
        if line.contains(COMMENT_CLOSE) {
            in_comment = false;
            continue;
        }

        if in_comment {
            continue;
        }

        if let Some(declaration) = match_declaration(line) {
            tables.push(declaration);
        }
    }

    tables
}

fn match_declaration(line: &str) -> Option<Declaration> {
    if call_pattern().is_match(line) {
        let name = line.split('(').next().unwrap_or_default().trim();
        return Some(Declaration {
            name: name.to_string(),
            kind: DeclarationKind::Call,
        });
    }

    if annotated_pattern().is_match(line) && line.contains('=') {
        let name = line.split('=').next().unwrap_or_default().trim();
        return Some(Declaration {
            name: name.to_string(),
            kind: DeclarationKind::Annotated,
        });
    }

    None
}

#[derive(Debug, Clone)]
pub struct CountReport {
    pub path: PathBuf,
    pub declarations: Vec<Declaration>,
}

impl CountReport {
    pub fn total(&self) -> usize {
        self.declarations.len()
    }

    pub fn count_of(&self, kind: DeclarationKind) -> usize {
        self.declarations.iter().filter(|d| d.kind == kind).count()
    }

    /// 1 起算的名稱列表，每行一個
    pub fn listing(&self) -> String {
        self.declarations
            .iter()
            .enumerate()
            .map(|(i, d)| format!("{}. {}", i + 1, d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for CountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total tables found: {}", self.total())
    }
}

pub fn run_count<S: Storage>(storage: &S, path: &Path) -> Result<CountReport> {
    let text = storage.read_text(path)?;
    let declarations = count_tables(&text);

    let report = CountReport {
        path: storage.resolve(path),
        declarations,
    };
    tracing::debug!(
        "{}: {} call-style, {} annotated",
        report.path.display(),
        report.count_of(DeclarationKind::Call),
        report.count_of(DeclarationKind::Annotated)
    );

    Ok(report)
}
