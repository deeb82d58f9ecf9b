//! Storage Models
//!
//! The flat settings record kept in synced storage.

use leptos_drag::{from_percent, to_percent, Point, Size};
use serde::{Deserialize, Deserializer, Serialize};

use crate::age;

/// Everything the widget reads from storage.
/// Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub font_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_position")]
    pub widget_position_percentage: Option<WidgetPosition>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Settings {
    pub fn birthdate(&self) -> Option<&str> {
        non_blank(&self.birthdate)
    }

    /// Reference timestamp in epoch milliseconds, if set and parseable
    pub fn birthdate_ms(&self) -> Option<f64> {
        self.birthdate().and_then(age::parse_birthdate)
    }

    pub fn text_color(&self) -> Option<&str> {
        non_blank(&self.text_color)
    }

    pub fn font_url(&self) -> Option<&str> {
        non_blank(&self.font_url)
    }
}

/// Widget top-left as percentages of the viewport at save time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WidgetPosition {
    pub left: f64,
    pub top: f64,
}

impl WidgetPosition {
    /// Accepts only an object whose `left` and `top` are finite numbers
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let left = value.get("left")?.as_f64()?;
        let top = value.get("top")?.as_f64()?;
        (left.is_finite() && top.is_finite()).then_some(Self { left, top })
    }

    pub fn from_pixels(pos: Point, viewport: Size) -> Option<Self> {
        to_percent(pos, viewport).map(|(left, top)| Self { left, top })
    }

    pub fn to_pixels(self, viewport: Size) -> Point {
        from_percent(self.left, self.top, viewport)
    }
}

/// A malformed stored position must not poison the rest of the record
fn lenient_position<'de, D>(deserializer: D) -> Result<Option<WidgetPosition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(WidgetPosition::from_value))
}
