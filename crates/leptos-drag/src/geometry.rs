//! Viewport Geometry
//!
//! Pixel positions, sizes and the clamp / percentage conversions used to
//! keep an overlay inside the visible area.

use std::ops::Sub;

/// A point in viewport (client) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width/height pair, used for both the widget box and the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Clamp a top-left position so a box of `size` stays inside `viewport`.
///
/// A box larger than the viewport is pinned to 0 on that axis.
pub fn clamp_to_viewport(pos: Point, size: Size, viewport: Size) -> Point {
    Point::new(
        clamp_axis(pos.x, size.width, viewport.width),
        clamp_axis(pos.y, size.height, viewport.height),
    )
}

fn clamp_axis(value: f64, extent: f64, limit: f64) -> f64 {
    value.min(limit - extent).max(0.0)
}

/// Pixel position -> (left%, top%) of the viewport.
/// `None` when the viewport has no area.
pub fn to_percent(pos: Point, viewport: Size) -> Option<(f64, f64)> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }
    Some((pos.x / viewport.width * 100.0, pos.y / viewport.height * 100.0))
}

/// (left%, top%) -> pixel position against the current viewport
pub fn from_percent(left: f64, top: f64, viewport: Size) -> Point {
    Point::new(left / 100.0 * viewport.width, top / 100.0 * viewport.height)
}
