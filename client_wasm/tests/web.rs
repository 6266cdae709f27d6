//! Browser-only checks, run with `wasm-pack test`
#![cfg(target_arch = "wasm32")]

use client_wasm::init_logging;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_console_logger_installs_once() {
    // The start hook may already have installed it
    init_logging(log::Level::Info);

    assert!(!init_logging(log::Level::Info), "Second install is refused");
    assert_eq!(log::max_level(), log::LevelFilter::Info);
    log::info!("console logger ready");
}
