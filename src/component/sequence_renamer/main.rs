//! 序列重新編號主模組
//!
//! 協調掃描、計畫與兩階段重新命名的整體流程

use super::rename_plan::RenamePlan;
use crate::signal::{ShutdownSignal, is_shutdown};
use crate::tools::{scan_sequence_files, validate_directory_exists};
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// 固定的序列前綴
pub const SEQUENCE_PREFIX: &str = "help";

/// 序列重新編號器
pub struct SequenceRenamer {
    shutdown_signal: ShutdownSignal,
}

/// 重新命名結果統計
#[derive(Debug, Default)]
pub struct RenameResult {
    pub renamed_count: usize,
    pub unchanged_count: usize,
}

impl SequenceRenamer {
    #[must_use]
    pub const fn new(shutdown_signal: ShutdownSignal) -> Self {
        Self { shutdown_signal }
    }

    /// 掃描目錄並建立重新命名計畫，不動到任何檔案
    pub fn plan(&self, directory: &Path) -> Result<RenamePlan> {
        validate_directory_exists(directory)?;
        let files = scan_sequence_files(directory, SEQUENCE_PREFIX)?;
        Ok(RenamePlan::build(&files, SEQUENCE_PREFIX))
    }

    /// 執行計畫：待改名的檔案先移入暫存檔名，再移到最終檔名
    ///
    /// 第一階段結束後所有目標檔名都已空出（佔著目標檔名的檔案
    /// 必然符合前綴，已被移走），第二階段不可能蓋掉還沒讀到的
    /// 來源檔。中斷信號只阻止還沒進入暫存檔名的檔案開始處理，
    /// 已暫存的檔案一律推進到最終檔名。
    pub fn execute(&self, directory: &Path, plan: &RenamePlan) -> Result<RenameResult> {
        let mut result = RenameResult::default();

        let progress_bar = ProgressBar::new(plan.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar.set_message(t!("renamer.renaming").to_string());

        // 第一階段：移入暫存檔名
        let mut staged: Vec<(PathBuf, String)> = Vec::new();
        let mut interrupted = false;

        for step in &plan.steps {
            if step.is_unchanged() {
                result.unchanged_count += 1;
                progress_bar.inc(1);
                continue;
            }

            if is_shutdown(&self.shutdown_signal) {
                interrupted = true;
                break;
            }

            let source = directory.join(&step.source_name);
            // 點開頭且不含前綴，重新掃描也不會誤認成序列檔案
            let temp = directory.join(format!(".{}.resort", Uuid::new_v4()));
            fs::rename(&source, &temp)
                .with_context(|| format!("Failed to stage {} for renaming", source.display()))?;
            staged.push((temp, step.target_name.clone()));
        }

        // 第二階段：暫存檔移至最終檔名
        for (temp, target_name) in staged {
            let target = directory.join(&target_name);
            if target.exists() {
                bail!("Target name already occupied: {}", target.display());
            }
            fs::rename(&temp, &target)
                .with_context(|| format!("Failed to rename to {}", target.display()))?;
            result.renamed_count += 1;
            progress_bar.inc(1);
        }

        if interrupted {
            progress_bar.abandon_with_message(t!("renamer.interrupted").to_string());
        } else {
            progress_bar.finish_with_message(t!("renamer.done").to_string());
        }

        Ok(result)
    }

    /// 一次完成計畫與執行；找不到符合的檔案時什麼都不做
    pub fn run(&self, directory: &Path) -> Result<RenameResult> {
        let plan = self.plan(directory)?;

        if plan.is_empty() {
            info!("No sequence files found in {}", directory.display());
            return Ok(RenameResult::default());
        }

        self.execute(directory, &plan)
    }
}
