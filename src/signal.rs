//! 中斷信號處理
//!
//! Ctrl-C 只設旗標，各流程在檔案操作之間自行檢查

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 跨元件共用的關閉旗標
pub type ShutdownSignal = Arc<AtomicBool>;

#[must_use]
pub fn setup_shutdown_signal() -> ShutdownSignal {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        signal_clone.store(true, Ordering::SeqCst);
        eprintln!("\n{}", t!("signal.interrupt"));
    })
    .expect("無法設定 Ctrl-C 處理器");

    shutdown_signal
}

/// 檢查是否已收到中斷信號
#[must_use]
pub fn is_shutdown(signal: &ShutdownSignal) -> bool {
    signal.load(Ordering::SeqCst)
}
