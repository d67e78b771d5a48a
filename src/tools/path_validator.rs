use anyhow::{Result, bail};
use std::path::Path;

/// 在動到任何檔案之前先確認目錄可用
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        bail!("Path is not a directory: {}", path.display());
    }
    Ok(())
}
