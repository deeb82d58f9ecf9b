//! Widget Presentation
//!
//! Pure mapping from stored settings and the current viewport to what the
//! widget should look like. Recomputed from scratch on every change.

use leptos_drag::{clamp_to_viewport, Point, Size};

use crate::config::{ANCHOR_MARGIN_PX, DEFAULT_TEXT_COLOR};
use crate::font;
use crate::models::{Settings, WidgetPosition};

/// Where the widget sits
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Placement {
    /// Default bottom-right corner with a fixed margin
    #[default]
    Anchored,
    /// Absolute top-left in pixels
    Absolute(Point),
}

impl Placement {
    pub fn left(&self) -> String {
        match self {
            Placement::Anchored => "auto".to_string(),
            Placement::Absolute(p) => format!("{}px", p.x),
        }
    }

    pub fn top(&self) -> String {
        match self {
            Placement::Anchored => "auto".to_string(),
            Placement::Absolute(p) => format!("{}px", p.y),
        }
    }

    pub fn right(&self) -> String {
        match self {
            Placement::Anchored => format!("{}px", ANCHOR_MARGIN_PX),
            Placement::Absolute(_) => "auto".to_string(),
        }
    }

    pub fn bottom(&self) -> String {
        self.right()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    pub placement: Placement,
    /// `font-family` for both content regions
    pub font_family: String,
    /// Stylesheet to load, when a font URL is configured
    pub font_href: Option<String>,
    pub color: String,
    /// Reference timestamp; `None` hides the widget
    pub birthdate_ms: Option<f64>,
}

impl Presentation {
    pub fn is_visible(&self) -> bool {
        self.birthdate_ms.is_some()
    }
}

pub fn present(settings: &Settings, viewport: Size, widget: Size) -> Presentation {
    let placement = match settings.widget_position_percentage {
        Some(pos) => Placement::Absolute(clamp_to_viewport(pos.to_pixels(viewport), widget, viewport)),
        None => Placement::Anchored,
    };
    let font_href = settings.font_url().map(str::to_string);
    let family = settings.font_url().map(font::family_from_url);

    Presentation {
        placement,
        font_family: font::font_stack(family.as_deref()),
        font_href,
        color: settings.text_color().unwrap_or(DEFAULT_TEXT_COLOR).to_string(),
        birthdate_ms: settings.birthdate_ms(),
    }
}

/// Reapply a stored position against a resized viewport.
///
/// Returns the clamped pixel position, plus the percentage to persist
/// when clamping had to move the widget.
pub fn reclamp(stored: WidgetPosition, viewport: Size, widget: Size) -> (Point, Option<WidgetPosition>) {
    let wanted = stored.to_pixels(viewport);
    let clamped = clamp_to_viewport(wanted, widget, viewport);
    if (clamped.x - wanted.x).abs() < 0.5 && (clamped.y - wanted.y).abs() < 0.5 {
        (clamped, None)
    } else {
        (clamped, WidgetPosition::from_pixels(clamped, viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size { width: 1000.0, height: 500.0 };
    const WIDGET: Size = Size { width: 200.0, height: 100.0 };

    fn settings_with(position: Option<WidgetPosition>) -> Settings {
        Settings {
            birthdate: Some("1990-01-01".to_string()),
            widget_position_percentage: position,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let p = present(&Settings::default(), VIEWPORT, WIDGET);
        assert_eq!(p.placement, Placement::Anchored);
        assert_eq!(p.color, "#00FF7F");
        assert_eq!(p.font_family, r#""Roboto Mono", "Courier New", Courier, monospace"#);
        assert_eq!(p.font_href, None);
        assert!(!p.is_visible());
    }

    #[test]
    fn test_anchored_css() {
        let placement = Placement::Anchored;
        assert_eq!(placement.left(), "auto");
        assert_eq!(placement.top(), "auto");
        assert_eq!(placement.right(), "20px");
        assert_eq!(placement.bottom(), "20px");
    }

    #[test]
    fn test_absolute_css() {
        let placement = Placement::Absolute(Point::new(12.0, 34.5));
        assert_eq!(placement.left(), "12px");
        assert_eq!(placement.top(), "34.5px");
        assert_eq!(placement.right(), "auto");
        assert_eq!(placement.bottom(), "auto");
    }

    #[test]
    fn test_stored_position_is_converted_and_clamped() {
        let p = present(&settings_with(Some(WidgetPosition { left: 10.0, top: 20.0 })), VIEWPORT, WIDGET);
        assert_eq!(p.placement, Placement::Absolute(Point::new(100.0, 100.0)));

        let p = present(&settings_with(Some(WidgetPosition { left: 95.0, top: 95.0 })), VIEWPORT, WIDGET);
        assert_eq!(p.placement, Placement::Absolute(Point::new(800.0, 400.0)));
    }

    #[test]
    fn test_custom_font_and_color() {
        let settings = Settings {
            birthdate: Some("1990-01-01".to_string()),
            text_color: Some("#123456".to_string()),
            font_url: Some("https://fonts.example/css?family=Open+Sans:400,700".to_string()),
            widget_position_percentage: None,
        };
        let p = present(&settings, VIEWPORT, WIDGET);
        assert_eq!(p.color, "#123456");
        assert_eq!(p.font_href.as_deref(), Some("https://fonts.example/css?family=Open+Sans:400,700"));
        assert!(p.font_family.starts_with("'Open Sans', "));
        assert!(p.is_visible());
    }

    #[test]
    fn test_unparseable_birthdate_hides() {
        let settings = Settings {
            birthdate: Some("someday".to_string()),
            ..Default::default()
        };
        assert!(!present(&settings, VIEWPORT, WIDGET).is_visible());
    }

    #[test]
    fn test_reclamp_inside_keeps_stored_value() {
        let (pos, update) = reclamp(WidgetPosition { left: 50.0, top: 50.0 }, VIEWPORT, WIDGET);
        assert_eq!(pos, Point::new(500.0, 250.0));
        assert_eq!(update, None);
    }

    #[test]
    fn test_reclamp_after_shrink_persists_new_value() {
        // Saved on a wide screen near the right edge
        let (pos, update) = reclamp(WidgetPosition { left: 90.0, top: 10.0 }, VIEWPORT, WIDGET);
        assert_eq!(pos, Point::new(800.0, 50.0));
        assert_eq!(update, Some(WidgetPosition { left: 80.0, top: 10.0 }));
    }
}
