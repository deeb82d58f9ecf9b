//! Synced Storage Bindings
//!
//! Frontend bindings to `chrome.storage.sync`.

use serde::Serialize;
use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::config::SETTINGS_KEYS;
use crate::models::{Settings, WidgetPosition};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "sync"], js_name = get)]
    async fn sync_get(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "sync"], js_name = set)]
    async fn sync_set(items: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "storage", "onChanged"], js_name = addListener)]
    fn add_changed_listener(callback: &Closure<dyn FnMut(JsValue, JsValue)>);
}

// ========================
// Write Records
// ========================

/// What the settings editor writes
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate<'a> {
    pub birthdate: &'a str,
    pub text_color: &'a str,
    pub font_url: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PositionUpdate {
    widget_position_percentage: WidgetPosition,
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

// ========================
// Commands
// ========================

pub async fn load_settings() -> Result<Settings, String> {
    let keys: js_sys::Array = SETTINGS_KEYS.iter().map(|k| JsValue::from_str(k)).collect();
    let result = sync_get(keys.into()).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_settings(update: &SettingsUpdate<'_>) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(update).map_err(|e| e.to_string())?;
    sync_set(js_args).await.map_err(js_error)?;
    Ok(())
}

pub async fn save_position(position: WidgetPosition) -> Result<(), String> {
    debug!(left = position.left, top = position.top, "Saving widget position");
    let record = PositionUpdate { widget_position_percentage: position };
    let js_args = serde_wasm_bindgen::to_value(&record).map_err(|e| e.to_string())?;
    sync_set(js_args).await.map_err(js_error)?;
    Ok(())
}

/// Run `callback` on any storage change. The diff is ignored; listeners
/// re-read whatever they need.
pub fn on_changed<F>(callback: F)
where
    F: Fn() + 'static,
{
    let listener = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |_changes: JsValue, _area: JsValue| {
        callback();
    });
    add_changed_listener(&listener);
    listener.forget();
}
