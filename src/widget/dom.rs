//! DOM helpers for the widget: measurement, the font link and window events.

use leptos_drag::{Point, Size};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlLinkElement};

use crate::config::FONT_LINK_ID;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Current `innerWidth` x `innerHeight`
pub fn viewport() -> Size {
    let Some(win) = web_sys::window() else {
        return Size::default();
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(width, height)
}

pub fn size_of(el: &HtmlElement) -> Size {
    Size::new(el.offset_width() as f64, el.offset_height() as f64)
}

pub fn top_left(el: &Element) -> Point {
    let rect = el.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

/// Make the element measurable before the reactive style catches up
pub fn show(el: &HtmlElement) {
    let _ = el.style().set_property("display", "block");
}

/// Point the shared font stylesheet at `href`, creating the link once
pub fn ensure_font_link(href: &str) {
    let Some(doc) = document() else { return };
    let link = match doc.get_element_by_id(FONT_LINK_ID) {
        Some(existing) => existing.dyn_into::<HtmlLinkElement>().ok(),
        None => create_font_link(&doc),
    };
    if let Some(link) = link {
        link.set_href(href);
    }
}

fn create_font_link(doc: &Document) -> Option<HtmlLinkElement> {
    let link = doc.create_element("link").ok()?.dyn_into::<HtmlLinkElement>().ok()?;
    link.set_id(FONT_LINK_ID);
    link.set_rel("stylesheet");
    doc.head()?.append_child(&link).ok()?;
    Some(link)
}

/// Bind a window resize handler for the lifetime of the page
pub fn on_window_resize<F>(handler: F)
where
    F: Fn() + 'static,
{
    let on_resize = Closure::<dyn FnMut()>::new(move || handler());
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}
