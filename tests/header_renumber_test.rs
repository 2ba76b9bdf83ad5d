use anyhow::Result;
use datatable_tools::core::header_renumber::{run_renumber, RenumberError};
use datatable_tools::LocalStorage;
use std::path::Path;
use tempfile::TempDir;

const DOC: &str = "# Tables\n\n### 3. **function**\nDescribes functions.\n\n### 3. **variable** (partial)\n\n### 10. **stmt**\n";

/// 測試未指定輸出檔時覆寫原檔
#[test]
fn test_renumber_in_place() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("tables.md"), DOC)?;

    let storage = LocalStorage::new(temp_dir.path());
    let report = run_renumber(&storage, Path::new("tables.md"), None, false)?;

    assert_eq!(report.headings_renumbered, 3);
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("tables.md"))?,
        "# Tables\n\n### 1. **function**\nDescribes functions.\n\n### 2. **variable** (partial)\n\n### 3. **stmt**\n"
    );
    assert!(report.to_string().contains("tables.md"));
    Ok(())
}

#[test]
fn test_renumber_to_separate_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("in.md"), DOC)?;

    let storage = LocalStorage::new(temp_dir.path());
    run_renumber(&storage, Path::new("in.md"), Some(Path::new("out/renumbered.md")), false)?;

    assert_eq!(std::fs::read_to_string(temp_dir.path().join("in.md"))?, DOC);
    let written = std::fs::read_to_string(temp_dir.path().join("out/renumbered.md"))?;
    assert!(written.contains("### 2. **variable** (partial)"));
    Ok(())
}

#[test]
fn test_second_run_is_noop() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("doc.md"), DOC)?;
    let storage = LocalStorage::new(temp_dir.path());

    run_renumber(&storage, Path::new("doc.md"), None, false)?;
    let first = std::fs::read_to_string(temp_dir.path().join("doc.md"))?;
    run_renumber(&storage, Path::new("doc.md"), None, false)?;
    let second = std::fs::read_to_string(temp_dir.path().join("doc.md"))?;

    assert_eq!(first, second);
    Ok(())
}

/// 測試讀取失敗時不會寫入輸出檔
#[test]
fn test_read_failure_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    let err = run_renumber(
        &storage,
        Path::new("missing.md"),
        Some(Path::new("out.md")),
        false,
    )
    .unwrap_err();

    assert!(matches!(err, RenumberError::Read(_)));
    assert!(err.to_string().starts_with("Error reading file:"));
    assert!(!temp_dir.path().join("out.md").exists());
}

#[test]
fn test_write_failure_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("doc.md"), DOC)?;
    // 輸出路徑是目錄，寫入必定失敗
    std::fs::create_dir_all(temp_dir.path().join("taken"))?;

    let storage = LocalStorage::new(temp_dir.path());
    let err = run_renumber(&storage, Path::new("doc.md"), Some(Path::new("taken")), false)
        .unwrap_err();

    assert!(matches!(err, RenumberError::Write(_)));
    assert_eq!(std::fs::read_to_string(temp_dir.path().join("doc.md"))?, DOC);
    Ok(())
}
