//! Age Tracker Extension
//!
//! One wasm module, three entry points: the background injector, the
//! content-side widget and the popup settings editor.

pub mod age;
pub mod background;
pub mod components;
pub mod config;
pub mod font;
pub mod logging;
pub mod models;
pub mod presentation;
pub mod storage;
pub mod store;
pub mod ticker;
pub mod widget;

use tracing::info;
use wasm_bindgen::prelude::*;

use components::SettingsEditor;

pub use background::on_navigation;

/// Background service worker
#[wasm_bindgen]
pub fn run_background() {
    console_error_panic_hook::set_once();
    logging::init();
    info!(component = "background", "Injector ready");
}

/// Content script, once per injection
#[wasm_bindgen]
pub fn run_content() {
    console_error_panic_hook::set_once();
    logging::init();
    if widget::mount() {
        info!(component = "content", "Widget mounted");
    }
}

/// Popup page
#[wasm_bindgen]
pub fn run_popup() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(SettingsEditor);
    info!(component = "popup", "Settings editor mounted");
}
