//! 序列檔案掃描模組
//!
//! 只掃描目錄第一層，依前綴過濾後按檔名排序

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 序列檔案資訊
#[derive(Debug, Clone)]
pub struct SequenceFileInfo {
    pub path: PathBuf,
    /// 檔名（含副檔名），排序鍵
    pub name: String,
}

/// 掃描目錄下檔名以 `prefix` 開頭的一般檔案，按檔名字典序排序
///
/// 不進入子目錄，子目錄本身即使符合前綴也不列入。
/// 讀取目錄失敗時回傳錯誤而不是空清單。
pub fn scan_sequence_files(directory: &Path, prefix: &str) -> Result<Vec<SequenceFileInfo>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry =
            entry.with_context(|| format!("Failed to list directory {}", directory.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        if name.starts_with(prefix) {
            files.push(SequenceFileInfo {
                name: name.to_string(),
                path: entry.into_path(),
            });
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
