//! Integral rectangles, as used by display-space code.
use serde::{Deserialize, Serialize};

/// A rectangle given by its top-left corner and a width/height pair.
///
/// Unlike the physics side's bounding boxes, nothing stops a `Rect` from being empty or even having a negative
/// extent; [clamp_rectangle_into] can produce such rectangles when the source lies entirely outside the bounds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// `x + width`, saturating at the limits of `i32`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// `y + height`, saturating at the limits of `i32`.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }
}

/// Build a rectangle from float coordinates, truncating each toward zero.
pub fn create_rectangle(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x as i32, y as i32, width as i32, height as i32)
}

/// Shrink `a` so that it fits inside the extent of `b`.
///
/// This is not an intersection. The origin of `a` is clamped to be non-negative, and then the width/height are cut
/// down so that the right and bottom edges do not pass `b.width` and `b.height`. `b`'s own position is ignored.
pub fn clamp_rectangle_into(a: Rect, b: Rect) -> Rect {
    let x = a.x.max(0);
    let y = a.y.max(0);
    let mut width = a.width;
    let mut height = a.height;

    // Compare in i64 so that rectangles near the limits of i32 can't overflow.
    if i64::from(x) + i64::from(width) > i64::from(b.width) {
        width = b.width.saturating_sub(x);
    }
    if i64::from(y) + i64::from(height) > i64::from(b.height) {
        height = b.height.saturating_sub(y);
    }

    Rect::new(x, y, width, height)
}
