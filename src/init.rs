//! 程式初始化
//!
//! 設定日誌輸出，`RUST_LOG` 可覆寫預設等級

use env_logger::Env;

pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
