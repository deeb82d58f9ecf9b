//! UI Components
//!
//! Leptos components rendered in extension pages.

mod settings_editor;

pub use settings_editor::SettingsEditor;
