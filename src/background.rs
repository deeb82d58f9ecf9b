//! Widget Injector
//!
//! Background service worker side: handles top-level navigations and
//! injects the widget's stylesheet and script when the page lacks it.
//!
//! The `webNavigation` listeners themselves are added by `background.js`
//! while the worker script first runs, and forward to [`on_navigation`].

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use url::Url;
use wasm_bindgen::prelude::*;

use crate::config::{CONTENT_SCRIPT, CONTENT_STYLESHEET, WIDGET_SELECTOR};

#[wasm_bindgen(inline_js = "export function widget_lookup() { \
    return function (selector) { return document.querySelector(selector) !== null; }; \
}")]
extern "C" {
    /// Self-contained page function taking the selector as its only arg;
    /// serialized by `chrome.scripting`
    fn widget_lookup() -> js_sys::Function;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "scripting"], js_name = executeScript)]
    async fn execute_script(injection: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "scripting"], js_name = insertCSS)]
    async fn insert_css(injection: JsValue) -> Result<JsValue, JsValue>;
}

// ========================
// Types
// ========================

/// Fields of a `webNavigation` event the injector looks at
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationDetails {
    pub tab_id: i32,
    pub frame_id: i32,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InjectionResult {
    #[serde(default)]
    pub result: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InjectionTarget {
    tab_id: i32,
}

/// `func` is attached separately, as it is not serializable
#[derive(Serialize)]
struct LookupInjection<'a> {
    target: InjectionTarget,
    args: [&'a str; 1],
}

impl LookupInjection<'static> {
    fn new(tab_id: i32) -> Self {
        Self {
            target: InjectionTarget { tab_id },
            args: [WIDGET_SELECTOR],
        }
    }
}

#[derive(Serialize)]
struct FileInjection<'a> {
    target: InjectionTarget,
    files: [&'a str; 1],
}

// ========================
// Decisions
// ========================

/// Top-level frame of an http(s) page only
pub fn should_inject(details: &NavigationDetails) -> bool {
    details.frame_id == 0
        && Url::parse(&details.url)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false)
}

/// Tab to check, for navigations worth injecting into
pub fn injection_tab(details: &NavigationDetails) -> Option<i32> {
    should_inject(details).then_some(details.tab_id)
}

/// Inject only when the lookup ran and did not find a widget
pub fn needs_injection(results: &[InjectionResult]) -> bool {
    results
        .first()
        .map(|first| !first.result.unwrap_or(false))
        .unwrap_or(false)
}

// ========================
// Chrome calls
// ========================

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

async fn find_widget(tab_id: i32) -> Result<Vec<InjectionResult>, String> {
    let injection = serde_wasm_bindgen::to_value(&LookupInjection::new(tab_id)).map_err(|e| e.to_string())?;
    js_sys::Reflect::set(&injection, &JsValue::from_str("func"), &widget_lookup()).map_err(js_error)?;
    let results = execute_script(injection).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(results).map_err(|e| e.to_string())
}

fn file_injection(tab_id: i32, file: &str) -> Result<JsValue, String> {
    let injection = FileInjection {
        target: InjectionTarget { tab_id },
        files: [file],
    };
    serde_wasm_bindgen::to_value(&injection).map_err(|e| e.to_string())
}

async fn inject_if_absent(tab_id: i32) {
    match find_widget(tab_id).await {
        Ok(results) if needs_injection(&results) => {}
        Ok(_) => {
            debug!(tab_id, "Widget already present");
            return;
        }
        Err(e) => {
            warn!(tab_id, error = %e, "Widget lookup failed");
            return;
        }
    }

    let css = file_injection(tab_id, CONTENT_STYLESHEET);
    match css {
        Ok(injection) => {
            if let Err(e) = insert_css(injection).await {
                error!(tab_id, error = %js_error(e), "Error injecting CSS");
            }
        }
        Err(e) => error!(tab_id, error = %e, "Error building CSS injection"),
    }

    let script = file_injection(tab_id, CONTENT_SCRIPT);
    match script {
        Ok(injection) => {
            if let Err(e) = execute_script(injection).await {
                error!(tab_id, error = %js_error(e), "Error injecting JS");
            }
        }
        Err(e) => error!(tab_id, error = %e, "Error building JS injection"),
    }
}

/// Handle one `webNavigation` event (`onCompleted` or `onHistoryStateUpdated`)
#[wasm_bindgen]
pub fn on_navigation(details: JsValue) {
    let details: NavigationDetails = match serde_wasm_bindgen::from_value(details) {
        Ok(details) => details,
        Err(e) => {
            warn!(error = %e, "Unreadable navigation details");
            return;
        }
    };
    let Some(tab_id) = injection_tab(&details) else { return };
    debug!(tab_id, url = %details.url, "Navigation observed");
    wasm_bindgen_futures::spawn_local(inject_if_absent(tab_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(frame_id: i32, url: &str) -> NavigationDetails {
        NavigationDetails {
            tab_id: 7,
            frame_id,
            url: url.to_string(),
        }
    }

    #[test]
    fn test_injects_top_frame_web_pages() {
        assert!(should_inject(&details(0, "https://example.com/watch?v=1")));
        assert!(should_inject(&details(0, "http://localhost:8080/")));
    }

    #[test]
    fn test_skips_sub_frames() {
        assert!(!should_inject(&details(3, "https://example.com/")));
    }

    #[test]
    fn test_skips_other_schemes() {
        assert!(!should_inject(&details(0, "chrome://extensions/")));
        assert!(!should_inject(&details(0, "file:///tmp/page.html")));
        assert!(!should_inject(&details(0, "httpfoo://odd")));
        assert!(!should_inject(&details(0, "")));
    }

    #[test]
    fn test_injection_tab() {
        assert_eq!(injection_tab(&details(0, "https://example.com/")), Some(7));
        assert_eq!(injection_tab(&details(2, "https://example.com/")), None);
        assert_eq!(injection_tab(&details(0, "about:blank")), None);
    }

    #[test]
    fn test_lookup_passes_widget_selector() {
        let value = serde_json::to_value(LookupInjection::new(5)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "target": { "tabId": 5 }, "args": [WIDGET_SELECTOR] })
        );
        assert_eq!(value["args"][0], format!(".{}", crate::config::WIDGET_CLASS));
    }

    #[test]
    fn test_decode_navigation_details() {
        let json = r#"{ "tabId": 12, "frameId": 0, "url": "https://a.b/", "timeStamp": 1.5, "processId": 4 }"#;
        let details: NavigationDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.tab_id, 12);
        assert_eq!(details.frame_id, 0);
    }

    #[test]
    fn test_needs_injection() {
        let absent = InjectionResult { result: Some(false) };
        let present = InjectionResult { result: Some(true) };
        assert!(needs_injection(&[absent]));
        assert!(!needs_injection(&[present]));
        // Lookup returned nothing usable
        assert!(needs_injection(&[InjectionResult::default()]));
        assert!(!needs_injection(&[]));
    }

    #[test]
    fn test_decode_lookup_results() {
        let json = r#"[{ "documentId": "x", "frameId": 0, "result": true }]"#;
        let results: Vec<InjectionResult> = serde_json::from_str(json).unwrap();
        assert!(!needs_injection(&results));
    }
}
