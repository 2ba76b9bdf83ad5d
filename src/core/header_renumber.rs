use crate::domain::model::Heading;
use crate::domain::ports::Storage;
use crate::utils::error::ToolError;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(### )(\d+)(\. \*\*)(.*?)(\*\*)(.*)$").expect("heading pattern is valid")
    })
}

pub fn parse_heading(line: &str) -> Option<Heading> {
    let caps = heading_pattern().captures(line)?;
    Some(Heading {
        prefix: caps[1].to_string(),
        ordinal: caps[2].to_string(),
        open: caps[3].to_string(),
        title: caps[4].to_string(),
        close: caps[5].to_string(),
        rest: caps[6].to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenumberOutcome {
    pub content: String,
    pub headings_renumbered: usize,
}

/// 依出現順序把符合的標題改成 1, 2, 3, ...；其餘行原樣保留
pub fn renumber(text: &str) -> RenumberOutcome {
    let mut content = String::with_capacity(text.len());
    let mut counter = 1;

    for segment in text.split_inclusive('\n') {
        let has_newline = segment.ends_with('\n');
        let body = segment.strip_suffix('\n').unwrap_or(segment);
        let body = body.strip_suffix('\r').unwrap_or(body);

        match parse_heading(body) {
            Some(heading) => {
                tracing::debug!("Heading {} -> {}: {}", heading.ordinal, counter, heading.title);
                content.push_str(&heading.render(counter));
                // 改寫過的標題一律補上換行
                content.push('\n');
                counter += 1;
            }
            None => {
                content.push_str(body);
                if has_newline {
                    content.push('\n');
                }
            }
        }
    }

    RenumberOutcome {
        content,
        headings_renumbered: counter - 1,
    }
}

#[derive(Error, Debug)]
pub enum RenumberError {
    #[error("Error reading file: {0}")]
    Read(#[source] ToolError),

    #[error("Error writing file: {0}")]
    Write(#[source] ToolError),
}

#[derive(Debug, Clone)]
pub struct RenumberReport {
    pub output_path: PathBuf,
    pub headings_renumbered: usize,
    pub rendered: String,
    pub dry_run: bool,
}

impl fmt::Display for RenumberReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(
                f,
                "Dry run complete, {} headings renumbered, nothing written to {}",
                self.headings_renumbered,
                self.output_path.display()
            )
        } else {
            write!(f, "Done, result saved to {}", self.output_path.display())
        }
    }
}

/// `output` 為 None 時覆寫輸入檔；讀取失敗時不會寫入任何檔案
pub fn run_renumber<S: Storage>(
    storage: &S,
    input: &Path,
    output: Option<&Path>,
    dry_run: bool,
) -> std::result::Result<RenumberReport, RenumberError> {
    let output = output.unwrap_or(input);

    let text = storage.read_text(input).map_err(RenumberError::Read)?;
    let outcome = renumber(&text);

    if outcome.headings_renumbered == 0 {
        tracing::warn!("No numbered headings found in {}", input.display());
    }

    if !dry_run {
        storage
            .write_text(output, &outcome.content)
            .map_err(RenumberError::Write)?;
    }

    Ok(RenumberReport {
        output_path: storage.resolve(output),
        headings_renumbered: outcome.headings_renumbered,
        rendered: outcome.content,
        dry_run,
    })
}
