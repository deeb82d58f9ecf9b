//! Age Widget Component
//!
//! Draggable overlay showing elapsed years, re-rendered every tick and
//! re-styled whenever synced settings change.

use gloo_timers::callback::{Interval, Timeout};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_drag::{bind_document_drag, clamp_to_viewport, create_drag_signals, make_on_click, make_on_mousedown, Point};
use reactive_stores::Store;
use tracing::{debug, warn};

use super::dom;
use crate::age::AgeReading;
use crate::config::{AGE_LABEL, HANDLE_TEXT, RESIZE_SAVE_DELAY_MS, TICK_INTERVAL_MS, WIDGET_CLASS};
use crate::models::{Settings, WidgetPosition};
use crate::presentation::{present, reclamp, Placement};
use crate::storage;
use crate::store::{store_apply_presentation, store_toggle_minimized, WidgetState, WidgetStateStoreFields, WidgetStore};
use crate::ticker::Ticker;

type TickerSlot = StoredValue<Ticker<Interval>, LocalStorage>;
type SaveSlot = StoredValue<Ticker<Timeout>, LocalStorage>;
/// Last position read from or written to storage
type SavedPosition = StoredValue<Option<WidgetPosition>>;

async fn fetch_settings() -> Settings {
    match storage::load_settings().await {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "Failed to load settings, using defaults");
            Settings::default()
        }
    }
}

/// Recompute everything from the stored settings
fn apply_settings(store: WidgetStore, root: NodeRef<Div>, ticker: TickerSlot, saved: SavedPosition, settings: &Settings) {
    saved.set_value(settings.widget_position_percentage);
    let el = root.get_untracked();
    if let (Some(el), Some(_)) = (&el, settings.birthdate_ms()) {
        dom::show(el);
    }
    let size = el.as_ref().map(|el| dom::size_of(el)).unwrap_or_default();
    let presentation = present(settings, dom::viewport(), size);

    if let Some(href) = &presentation.font_href {
        dom::ensure_font_link(href);
    }
    store_apply_presentation(&store, &presentation);

    if let Some(birth_ms) = presentation.birthdate_ms {
        start_counter(store, ticker, birth_ms);
    }
    debug!(visible = presentation.is_visible(), "Settings applied");
}

fn start_counter(store: WidgetStore, ticker: TickerSlot, birth_ms: f64) {
    let tick = move || store.reading().set(AgeReading::at(js_sys::Date::now(), birth_ms));
    ticker.update_value(|t| t.restart_interval(TICK_INTERVAL_MS, tick));
}

fn persist_position(position: WidgetPosition) {
    spawn_local(async move {
        if let Err(e) = storage::save_position(position).await {
            warn!(error = %e, "Failed to persist widget position");
        }
    });
}

/// Re-clamp the saved position against the resized viewport.
/// A moved widget is saved once resizing has been quiet for a while.
fn reconcile_position(store: WidgetStore, root: NodeRef<Div>, saved: SavedPosition, pending_save: SaveSlot) {
    let Some(stored) = saved.get_value() else { return };
    let Some(el) = root.get_untracked() else { return };
    let (placed, update) = reclamp(stored, dom::viewport(), dom::size_of(&el));
    store.placement().set(Placement::Absolute(placed));
    match update {
        Some(position) => pending_save.update_value(|slot| {
            slot.debounce(RESIZE_SAVE_DELAY_MS, move || {
                debug!(left = position.left, top = position.top, "Saving re-clamped position");
                persist_position(position);
            })
        }),
        // Back inside the viewport, nothing left to save
        None => pending_save.update_value(Ticker::stop),
    }
}

#[component]
pub fn AgeWidget() -> impl IntoView {
    let store: WidgetStore = Store::new(WidgetState::default());
    let root = NodeRef::<Div>::new();
    let ticker: TickerSlot = StoredValue::new_local(Ticker::default());
    let pending_save: SaveSlot = StoredValue::new_local(Ticker::default());
    let saved: SavedPosition = StoredValue::new(None);
    let drag = create_drag_signals();

    let refresh = move || {
        spawn_local(async move {
            let settings = fetch_settings().await;
            apply_settings(store, root, ticker, saved, &settings);
        });
    };
    refresh();
    storage::on_changed(refresh);
    dom::on_window_resize(move || reconcile_position(store, root, saved, pending_save));

    // Drag
    let origin = move || root.get_untracked().map(|el| dom::top_left(&el));
    let on_mousedown = make_on_mousedown(drag, origin);
    let on_click = make_on_click(drag, move || store_toggle_minimized(&store));

    bind_document_drag(
        drag,
        move |target: Point| {
            if let Some(el) = root.get_untracked() {
                let placed = clamp_to_viewport(target, dom::size_of(&el), dom::viewport());
                store.placement().set(Placement::Absolute(placed));
            }
        },
        move || {
            let current = match store.placement().get_untracked() {
                Placement::Absolute(p) => Some(p),
                Placement::Anchored => root.get_untracked().map(|el| dom::top_left(&el)),
            };
            let Some(position) = current.and_then(|p| WidgetPosition::from_pixels(p, dom::viewport())) else {
                return;
            };
            pending_save.update_value(Ticker::stop);
            saved.set_value(Some(position));
            persist_position(position);
        },
    );

    let placement = move || store.placement().get();
    let font_family = move || store.font_family().get();

    view! {
        <div
            node_ref=root
            class=WIDGET_CLASS
            class:minimized=move || store.minimized().get()
            style:display=move || if store.visible().get() { "block" } else { "none" }
            style:color=move || store.color().get()
            style:left=move || placement().left()
            style:top=move || placement().top()
            style:right=move || placement().right()
            style:bottom=move || placement().bottom()
        >
            <div
                class="age-tracker-widget-header"
                style:cursor=move || if drag.is_dragging() { "grabbing" } else { "grab" }
                on:mousedown=on_mousedown
                on:click=on_click
            >
                {HANDLE_TEXT}
            </div>

            // Full view
            <div class="age-tracker-widget-content" style:font-family=font_family>
                <div class="age-label">{AGE_LABEL}</div>
                <span class="integer-part">{move || store.reading().get().integer}</span>
                <span class="fractional-part">{move || store.reading().get().fraction_display()}</span>
            </div>

            // Minimized view
            <div class="age-tracker-minimized-content" style:font-family=font_family>
                <div class="minimized-age-label">{AGE_LABEL}</div>
                <div class="minimized-integer">{move || store.reading().get().integer}</div>
            </div>
        </div>
    }
}
