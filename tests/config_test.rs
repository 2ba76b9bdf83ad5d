use anyhow::Result;
use datatable_tools::{ToolError, ToolsConfig};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_load_without_config_file_uses_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let config = ToolsConfig::load(None, temp_dir.path())?;

    assert_eq!(config, ToolsConfig::default());
    assert_eq!(config.root(), Path::new("."));
    Ok(())
}

#[test]
fn test_load_default_config_file_from_root() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("datatable-tools.toml"),
        r#"
[paths]
list_file = "checklists/tables.txt"
"#,
    )?;

    let config = ToolsConfig::load(None, temp_dir.path())?;

    assert_eq!(config.list_file(), Path::new("checklists/tables.txt"));
    assert_eq!(config.database(), Path::new("tests/ast.db"));
    Ok(())
}

#[test]
fn test_explicit_config_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("custom.toml");

    let err = ToolsConfig::load(Some(missing.as_path()), temp_dir.path()).unwrap_err();
    assert!(matches!(err, ToolError::IoError { .. }));
}

#[test]
fn test_invalid_values_fail_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bad.toml");
    std::fs::write(&path, "[paths]\nlist_file = \"\"\n")?;

    let err = ToolsConfig::load(Some(path.as_path()), temp_dir.path()).unwrap_err();
    assert!(matches!(err, ToolError::InvalidConfigValueError { .. }));
    assert!(err.user_friendly_message().contains("paths.list_file"));
    Ok(())
}
