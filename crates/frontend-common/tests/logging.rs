//! Logging start-up in the browser. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use civic_id_frontend_common::logging::init_logging;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn tracing_installs_alongside_log_bridge() {
    wasm_logger::init(wasm_logger::Config::default());

    assert!(init_logging());
    assert!(!init_logging());
}
