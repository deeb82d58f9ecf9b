//! Fixed Defaults
//!
//! Storage keys, DOM identifiers and the fallback values applied when a
//! setting is absent.

/// Storage keys (camelCase, as written to `chrome.storage.sync`)
pub mod keys {
    pub const BIRTHDATE: &str = "birthdate";
    pub const TEXT_COLOR: &str = "textColor";
    pub const FONT_URL: &str = "fontUrl";
    pub const WIDGET_POSITION: &str = "widgetPositionPercentage";
}

/// Every key the widget reads on (re)apply
pub const SETTINGS_KEYS: [&str; 4] = [
    keys::BIRTHDATE,
    keys::TEXT_COLOR,
    keys::FONT_URL,
    keys::WIDGET_POSITION,
];

// ========================
// DOM
// ========================

pub const WIDGET_CLASS: &str = "age-tracker-widget";
pub const WIDGET_SELECTOR: &str = ".age-tracker-widget";
pub const FONT_LINK_ID: &str = "custom-age-tracker-font";
pub const AGE_LABEL: &str = "Age";
pub const HANDLE_TEXT: &str = "::";

// ========================
// Presentation
// ========================

pub const DEFAULT_TEXT_COLOR: &str = "#00FF7F";
/// Used when a font URL has no usable `family` parameter
pub const DEFAULT_FONT_FAMILY: &str = "Roboto Mono";
pub const FALLBACK_FONT_STACK: &str = r#""Roboto Mono", "Courier New", Courier, monospace"#;
/// Distance from the bottom-right corner when no position is stored
pub const ANCHOR_MARGIN_PX: f64 = 20.0;

pub const TICK_INTERVAL_MS: u32 = 50;
/// Quiet period after the last resize event before a re-clamped position is saved
pub const RESIZE_SAVE_DELAY_MS: u32 = 500;
/// Digits after the decimal point
pub const FRACTION_DIGITS: usize = 9;

// ========================
// Injection / editor
// ========================

pub const CONTENT_SCRIPT: &str = "content.js";
pub const CONTENT_STYLESHEET: &str = "content.css";

pub const SAVED_MESSAGE: &str = "Settings saved!";
pub const SAVED_MESSAGE_MS: u32 = 2_000;
