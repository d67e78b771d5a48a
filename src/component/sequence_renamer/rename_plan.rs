//! 重新命名計畫模組
//!
//! 依排序後的檔案清單產生序號與目標檔名，不接觸檔案系統

use crate::tools::SequenceFileInfo;
use std::path::Path;

/// 單一檔案的重新命名步驟
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameStep {
    /// 原始檔名（含副檔名）
    pub source_name: String,
    /// 目標檔名：前綴 + 零填補序號 + 原始副檔名
    pub target_name: String,
}

impl RenameStep {
    /// 原始檔名已經等於目標檔名時不需要移動
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.source_name == self.target_name
    }
}

/// 整批檔案的重新命名計畫
///
/// 步驟依檔名字典序排列，第 i 項對應序號 i + 1。
/// 目標檔名兩兩不同，因此計畫是同一組檔案的重新標號，
/// 不會合併或遺失任何檔案。
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    pub steps: Vec<RenameStep>,
    /// 序號的零填補位數
    pub width: usize,
}

impl RenamePlan {
    /// 依排序後的檔案清單建立計畫，清單為空時產生空計畫
    #[must_use]
    pub fn build(files: &[SequenceFileInfo], prefix: &str) -> Self {
        if files.is_empty() {
            return Self::default();
        }

        let width = ordinal_width(files.len());
        let steps = files
            .iter()
            .enumerate()
            .map(|(i, file)| RenameStep {
                source_name: file.name.clone(),
                target_name: format_target_name(prefix, i + 1, width, &file.name),
            })
            .collect();

        Self { steps, width }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 需要實際移動的步驟數
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.is_unchanged()).count()
    }
}

/// 以十進位印出 `count` 所需的位數
///
/// 9 -> 1、10 -> 2、100 -> 3；`count` 為 0 時回傳 0
#[must_use]
pub fn ordinal_width(count: usize) -> usize {
    let mut width = 0;
    let mut rest = count;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}

/// 組出目標檔名，保留原始副檔名，沒有副檔名就不加
fn format_target_name(prefix: &str, ordinal: usize, width: usize, source_name: &str) -> String {
    match Path::new(source_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{prefix}{ordinal:0width$}.{ext}"),
        None => format!("{prefix}{ordinal:0width$}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str) -> SequenceFileInfo {
        SequenceFileInfo {
            path: PathBuf::from(name),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_ordinal_width_single_digit() {
        assert_eq!(ordinal_width(1), 1);
        assert_eq!(ordinal_width(9), 1);
    }

    #[test]
    fn test_ordinal_width_at_powers_of_ten() {
        // 邊界：剛好 10 個檔案需要兩位數
        assert_eq!(ordinal_width(10), 2);
        assert_eq!(ordinal_width(100), 3);
        assert_eq!(ordinal_width(1000), 4);
    }

    #[test]
    fn test_ordinal_width_between_powers() {
        assert_eq!(ordinal_width(12), 2);
        assert_eq!(ordinal_width(99), 2);
        assert_eq!(ordinal_width(101), 3);
    }

    #[test]
    fn test_ordinal_width_zero() {
        assert_eq!(ordinal_width(0), 0);
    }

    #[test]
    fn test_build_small_plan() {
        let files = [file("helpA.png"), file("helpB.png"), file("helpC.png")];
        let plan = RenamePlan::build(&files, "help");

        assert_eq!(plan.width, 1);
        let targets: Vec<&str> = plan.steps.iter().map(|s| s.target_name.as_str()).collect();
        assert_eq!(targets, vec!["help1.png", "help2.png", "help3.png"]);
    }

    #[test]
    fn test_build_pads_to_count_width() {
        let files: Vec<SequenceFileInfo> = (b'a'..=b'l')
            .map(|c| file(&format!("help{}.png", c as char)))
            .collect();
        let plan = RenamePlan::build(&files, "help");

        assert_eq!(files.len(), 12);
        assert_eq!(plan.width, 2);
        assert_eq!(plan.steps[2].target_name, "help03.png");
        assert_eq!(plan.steps[11].target_name, "help12.png");
    }

    #[test]
    fn test_build_preserves_extension() {
        let files = [file("helpA.jpeg"), file("helpB.png")];
        let plan = RenamePlan::build(&files, "help");

        assert_eq!(plan.steps[0].target_name, "help1.jpeg");
        assert_eq!(plan.steps[1].target_name, "help2.png");
    }

    #[test]
    fn test_build_without_extension() {
        let files = [file("helpnotes")];
        let plan = RenamePlan::build(&files, "help");

        assert_eq!(plan.steps[0].target_name, "help1");
    }

    #[test]
    fn test_build_empty_plan() {
        let plan = RenamePlan::build(&[], "help");
        assert!(plan.is_empty());
        assert_eq!(plan.width, 0);
    }

    #[test]
    fn test_unchanged_detection() {
        let files = [file("help1.png"), file("help2.png"), file("help3.png")];
        let plan = RenamePlan::build(&files, "help");

        assert!(plan.steps.iter().all(RenameStep::is_unchanged));
        assert_eq!(plan.pending_count(), 0);
    }

    #[test]
    fn test_interleaved_numeric_names() {
        // 字典序：help1 < help11 < help2
        let files = [file("help1.png"), file("help11.png"), file("help2.png")];
        let plan = RenamePlan::build(&files, "help");

        assert_eq!(plan.steps[0].target_name, "help1.png");
        assert!(plan.steps[0].is_unchanged());
        assert_eq!(plan.steps[1].target_name, "help2.png");
        assert_eq!(plan.steps[2].target_name, "help3.png");
        assert_eq!(plan.pending_count(), 2);
    }
}
