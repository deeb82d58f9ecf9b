//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::age::AgeReading;
use crate::presentation::{Placement, Presentation};

/// In-memory state of the one widget on the page
#[derive(Clone, Debug, Default, Store)]
pub struct WidgetState {
    /// Live placement; dragging overrides what the settings produced
    pub placement: Placement,
    pub font_family: String,
    pub color: String,
    pub visible: bool,
    pub minimized: bool,
    /// Latest tick
    pub reading: AgeReading,
}

/// Type alias for the store
pub type WidgetStore = Store<WidgetState>;

// ========================
// Store Helper Functions
// ========================

/// Copy a freshly computed presentation into the store
pub fn store_apply_presentation(store: &WidgetStore, presentation: &Presentation) {
    store.placement().set(presentation.placement);
    store.font_family().set(presentation.font_family.clone());
    store.color().set(presentation.color.clone());
    store.visible().set(presentation.is_visible());
}

pub fn store_toggle_minimized(store: &WidgetStore) {
    store.minimized().update(|m| *m = !*m);
}
