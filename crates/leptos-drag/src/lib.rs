//! Leptos Drag Utilities
//!
//! Mouse dragging for a single fixed-position overlay.
//! Press/move/release is tracked as an explicit state machine so the click
//! that ends a drag can be told apart from a plain click on the handle.

mod geometry;

pub use geometry::{clamp_to_viewport, from_percent, to_percent, Point, Size};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drag gesture state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Button held on the handle
    Dragging {
        /// Pointer offset from the box's top-left corner
        offset: Point,
        /// Where the button went down
        press: Point,
        moved: bool,
    },
    /// Button released; the trailing click has not arrived yet
    Released { moved: bool },
}

impl DragState {
    /// Start a gesture with the pointer at `pointer` and the box at `origin`
    pub fn press(pointer: Point, origin: Point) -> Self {
        DragState::Dragging {
            offset: pointer - origin,
            press: pointer,
            moved: false,
        }
    }

    /// Feed a pointer position. Returns the unclamped top-left the box
    /// should follow, or `None` when not dragging or nothing moved yet.
    pub fn drag_to(&mut self, pointer: Point) -> Option<Point> {
        match self {
            DragState::Dragging { offset, press, moved } => {
                if pointer != *press {
                    *moved = true;
                }
                if *moved {
                    Some(pointer - *offset)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// End the gesture. Returns whether the pointer moved, or `None`
    /// if no gesture was in progress.
    pub fn release(&mut self) -> Option<bool> {
        match *self {
            DragState::Dragging { moved, .. } => {
                *self = DragState::Released { moved };
                Some(moved)
            }
            _ => None,
        }
    }

    /// Consume a click on the handle. Returns true when the click should
    /// act as a click (toggle), false when it only ends a drag.
    pub fn take_click(&mut self) -> bool {
        let toggles = match *self {
            DragState::Idle => true,
            DragState::Released { moved } | DragState::Dragging { moved, .. } => !moved,
        };
        *self = DragState::Idle;
        toggles
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Drag state signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    pub state_read: ReadSignal<DragState>,
    pub state_write: WriteSignal<DragState>,
}

impl DragSignals {
    pub fn is_dragging(&self) -> bool {
        self.state_read.get().is_dragging()
    }
}

pub fn create_drag_signals() -> DragSignals {
    let (state_read, state_write) = signal(DragState::Idle);
    DragSignals { state_read, state_write }
}

fn client_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn set_body_user_select(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.style().set_property("user-select", value);
    }
}

/// Create mousedown handler for the drag handle.
/// `origin` reports the box's current top-left corner.
pub fn make_on_mousedown<O>(drag: DragSignals, origin: O) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    O: Fn() -> Option<Point> + Copy + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(origin) = origin() {
            drag.state_write.set(DragState::press(client_point(&ev), origin));
        }
    }
}

/// Create click handler for the drag handle.
/// `on_click` runs only when the click did not finish a drag.
pub fn make_on_click<F>(drag: DragSignals, on_click: F) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    F: Fn() + Copy + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        let mut state = drag.state_read.get_untracked();
        let toggles = state.take_click();
        drag.state_write.set(state);
        if toggles {
            on_click();
        }
    }
}

/// Bind document-level mousemove/mouseup handlers.
///
/// `on_move` receives the unclamped top-left on every move while dragging;
/// `on_release` runs once when the button is released anywhere in the
/// document, including outside the window.
pub fn bind_document_drag<M, R>(drag: DragSignals, on_move: M, on_release: R)
where
    M: Fn(Point) + 'static,
    R: Fn() + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let before = drag.state_read.get_untracked();
        let mut state = before;
        if let Some(target) = state.drag_to(client_point(&ev)) {
            ev.prevent_default();
            set_body_user_select("none");
            if state != before {
                drag.state_write.set(state);
            }
            on_move(target);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let mut state = drag.state_read.get_untracked();
        if state.release().is_some() {
            drag.state_write.set(state);
            set_body_user_select("");
            on_release();
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
}
