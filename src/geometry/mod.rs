//! Geometry domain: integer axis-aligned rectangles in screen space.

mod rect;

#[cfg(test)]
mod tests;

pub use rect::{Rect, rotated_bounds};
