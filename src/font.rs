//! Font Resolution
//!
//! Derives a CSS font-family from a stylesheet URL in the
//! `?family=Name:weights` style used by web font services.

use url::Url;

use crate::config::{DEFAULT_FONT_FAMILY, FALLBACK_FONT_STACK};

/// Family name from the URL's `family` query parameter.
/// Falls back to the default family when the URL or parameter is unusable.
pub fn family_from_url(font_url: &str) -> String {
    parse_family(font_url).unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string())
}

fn parse_family(font_url: &str) -> Option<String> {
    let url = Url::parse(font_url).ok()?;
    let (_, value) = url.query_pairs().find(|(key, _)| key == "family")?;
    let name = value.split(':').next()?.replace('+', " ");
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Full `font-family` value: the custom family first, then the monospace stack
pub fn font_stack(family: Option<&str>) -> String {
    match family {
        Some(family) => format!("'{}', {}", family, FALLBACK_FONT_STACK),
        None => FALLBACK_FONT_STACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_with_weights() {
        assert_eq!(
            family_from_url("https://fonts.example/css?family=Open+Sans:400,700"),
            "Open Sans"
        );
    }

    #[test]
    fn test_family_percent_encoded() {
        assert_eq!(
            family_from_url("https://fonts.example/css2?family=Fira%20Code&display=swap"),
            "Fira Code"
        );
    }

    #[test]
    fn test_missing_family_falls_back() {
        assert_eq!(family_from_url("https://fonts.example/css?display=swap"), "Roboto Mono");
        assert_eq!(family_from_url("https://fonts.example/css?family="), "Roboto Mono");
    }

    #[test]
    fn test_unparseable_url_falls_back() {
        assert_eq!(family_from_url("not a url"), "Roboto Mono");
    }

    #[test]
    fn test_stack_without_custom_family() {
        assert_eq!(font_stack(None), r#""Roboto Mono", "Courier New", Courier, monospace"#);
    }

    #[test]
    fn test_stack_with_custom_family() {
        assert_eq!(
            font_stack(Some("Open Sans")),
            r#"'Open Sans', "Roboto Mono", "Courier New", Courier, monospace"#
        );
    }
}
