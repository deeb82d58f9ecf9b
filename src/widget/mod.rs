//! Age Widget
//!
//! Content-side overlay. At most one per document: mounting checks for an
//! existing widget node before touching the DOM.

mod component;
mod dom;

pub use component::AgeWidget;

use tracing::{debug, warn};

use crate::config::WIDGET_SELECTOR;

/// Where the widget gets mounted
pub trait WidgetHost {
    fn has_widget(&self) -> bool;
    fn attach(&self);
}

/// Attach unless a widget is already present. Returns whether it mounted.
pub fn mount_once(host: &impl WidgetHost) -> bool {
    if host.has_widget() {
        debug!("Widget already present, skipping mount");
        return false;
    }
    host.attach();
    true
}

struct DocumentHost {
    document: web_sys::Document,
}

impl WidgetHost for DocumentHost {
    fn has_widget(&self) -> bool {
        matches!(self.document.query_selector(WIDGET_SELECTOR), Ok(Some(_)))
    }

    fn attach(&self) {
        leptos::mount::mount_to_body(AgeWidget);
    }
}

/// Mount the widget into the current page
pub fn mount() -> bool {
    let Some(document) = dom::document() else {
        warn!("No document to mount the widget into");
        return false;
    };
    mount_once(&DocumentHost { document })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeHost {
        nodes: Cell<usize>,
    }

    impl WidgetHost for FakeHost {
        fn has_widget(&self) -> bool {
            self.nodes.get() > 0
        }

        fn attach(&self) {
            self.nodes.set(self.nodes.get() + 1);
        }
    }

    #[test]
    fn test_mount_twice_leaves_one_widget() {
        let host = FakeHost::default();
        assert!(mount_once(&host));
        assert!(!mount_once(&host));
        assert_eq!(host.nodes.get(), 1);
    }

    #[test]
    fn test_existing_widget_blocks_mount() {
        let host = FakeHost { nodes: Cell::new(1) };
        assert!(!mount_once(&host));
        assert_eq!(host.nodes.get(), 1);
    }
}
