//! Screen-space bounding boxes. Origin is the top-left corner of the window
//! and `y` grows downward, so `bottom > top` for any non-empty rectangle.
//! Derived edges saturate at the `i32` limits.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Negative sizes are clamped to zero.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w: w.max(0),
            h: h.max(0),
        }
    }

    /// Rectangle of the given size whose bottom edge is centred on `(cx, bottom)`.
    pub fn from_midbottom(cx: i32, bottom: i32, w: i32, h: i32) -> Self {
        let mut rect = Self::new(0, 0, w, h);
        rect.set_center_x(cx);
        rect.set_bottom(bottom);
        rect
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    pub fn center_x(&self) -> i32 {
        self.x.saturating_add(self.w / 2)
    }

    pub fn center_y(&self) -> i32 {
        self.y.saturating_add(self.h / 2)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.center_x(), self.center_y())
    }

    pub fn size(&self) -> (i32, i32) {
        (self.w, self.h)
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn set_center_x(&mut self, cx: i32) {
        self.x = cx - self.w / 2;
    }

    pub fn set_center(&mut self, (cx, cy): (i32, i32)) {
        self.x = cx - self.w / 2;
        self.y = cy - self.h / 2;
    }

    /// Copy of this rectangle resized to `(w, h)` around the same centre.
    pub fn resized_about_center(&self, w: i32, h: i32) -> Self {
        let mut rect = Self::new(self.x, self.y, w, h);
        rect.set_center(self.center());
        rect
    }

    /// True when the two rectangles share interior area. Touching edges and
    /// empty rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w == 0 || self.h == 0 || other.w == 0 || other.h == 0 {
            return false;
        }
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Grow (or shrink, for negative deltas) around the centre.
    pub fn inflate(&self, dw: i32, dh: i32) -> Self {
        Self::new(self.x - dw / 2, self.y - dh / 2, self.w + dw, self.h + dh)
    }
}

/// Size of the box that encloses a `w×h` sprite rotated by `degrees`.
///
/// Right-angle turns swap or keep the sides exactly; any other angle takes
/// the largest projected extent of the rotated corners, truncated to whole
/// pixels.
pub fn rotated_bounds(w: i32, h: i32, degrees: f32) -> (i32, i32) {
    if degrees % 90.0 == 0.0 {
        let turns = (degrees / 90.0) as i64;
        return if turns.rem_euclid(2) == 0 { (w, h) } else { (h, w) };
    }

    let radians = degrees.to_radians() as f64;
    let (sin, cos) = radians.sin_cos();
    let (w, h) = (w as f64, h as f64);
    let (cx, cy, sx, sy) = (cos * w, cos * h, sin * w, sin * h);

    let nx = (cx + sy)
        .abs()
        .max((cx - sy).abs())
        .max((-cx + sy).abs())
        .max((-cx - sy).abs());
    let ny = (sx + cy)
        .abs()
        .max((sx - cy).abs())
        .max((-sx + cy).abs())
        .max((-sx - cy).abs());

    (nx as i32, ny as i32)
}
