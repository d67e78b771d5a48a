use serde::{Deserialize, Serialize};

/// 使用者設定，對應工作目錄下的 settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// 介面語言，對應 locales/ 下的語系檔名
    pub language: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: UserSettings,
}
