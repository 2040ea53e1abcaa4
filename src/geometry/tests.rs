//! Geometry domain: tests for rectangle edges, overlap and rotation bounds.

use super::{Rect, rotated_bounds};

// -----------------------------------------------------------------------------
// Edge and centre accessors
// -----------------------------------------------------------------------------

#[test]
fn test_new_clamps_negative_size() {
    let rect = Rect::new(10, 10, -5, -1);
    assert_eq!(rect.size(), (0, 0));
}

#[test]
fn test_edges_and_center() {
    let rect = Rect::new(10, 20, 30, 41);
    assert_eq!(rect.left(), 10);
    assert_eq!(rect.right(), 40);
    assert_eq!(rect.top(), 20);
    assert_eq!(rect.bottom(), 61);
    assert_eq!(rect.center(), (25, 40));
}

#[test]
fn test_from_midbottom() {
    let rect = Rect::from_midbottom(1000, 640, 220, 220);
    assert_eq!(rect, Rect::new(890, 420, 220, 220));
    assert_eq!(rect.center_x(), 1000);
    assert_eq!(rect.bottom(), 640);
}

#[test]
fn test_setters_move_without_resizing() {
    let mut rect = Rect::new(0, 0, 50, 50);
    rect.set_right(100);
    rect.set_bottom(640);
    assert_eq!(rect, Rect::new(50, 590, 50, 50));

    rect.set_left(5);
    rect.set_top(7);
    assert_eq!(rect, Rect::new(5, 7, 50, 50));
}

#[test]
fn test_resized_about_center_keeps_center() {
    let rect = Rect::new(890, 420, 220, 220);
    let grown = rect.resized_about_center(300, 300);
    assert_eq!(grown.center(), rect.center());
    assert_eq!(grown.size(), (300, 300));
}

// -----------------------------------------------------------------------------
// Intersection
// -----------------------------------------------------------------------------

#[test]
fn test_overlapping_rects_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_touching_edges_do_not_intersect() {
    let floor = Rect::new(0, 640, 1280, 80);
    let standing = Rect::new(175, 560, 50, 80);
    assert_eq!(standing.bottom(), floor.top());
    assert!(!standing.intersects(&floor));

    let beside = Rect::new(10, 0, 10, 10);
    assert!(!Rect::new(0, 0, 10, 10).intersects(&beside));
}

#[test]
fn test_empty_rect_never_intersects() {
    let empty = Rect::new(5, 5, 0, 10);
    let big = Rect::new(0, 0, 100, 100);
    assert!(!empty.intersects(&big));
    assert!(!big.intersects(&empty));
}

#[test]
fn test_inflate_grows_around_center() {
    let rect = Rect::new(100, 100, 50, 50);
    let attack = rect.inflate(90, 60);
    assert_eq!(attack, Rect::new(55, 70, 140, 110));
    assert_eq!(attack.center(), rect.center());
}

// -----------------------------------------------------------------------------
// Rotation bounds
// -----------------------------------------------------------------------------

#[test]
fn test_rotated_bounds_right_angles() {
    assert_eq!(rotated_bounds(200, 100, 0.0), (200, 100));
    assert_eq!(rotated_bounds(200, 100, 90.0), (100, 200));
    assert_eq!(rotated_bounds(200, 100, 180.0), (200, 100));
    assert_eq!(rotated_bounds(200, 100, 270.0), (100, 200));
}

#[test]
fn test_rotated_bounds_diagonal_is_largest() {
    let (w, h) = rotated_bounds(220, 220, 45.0);
    // 220 * sqrt(2) = 311.12...
    assert_eq!((w, h), (311, 311));
}

#[test]
fn test_rotated_bounds_never_smaller_than_sprite() {
    for step in 0..36 {
        let angle = step as f32 * 25.0 % 360.0;
        let (w, h) = rotated_bounds(220, 220, angle);
        assert!(w >= 219 && h >= 219, "angle {angle}: {w}x{h}");
    }
}

// -----------------------------------------------------------------------------
// Extreme coordinates
// -----------------------------------------------------------------------------

#[test]
fn test_edges_saturate_near_i32_max() {
    let rect = Rect::new(i32::MAX - 10, i32::MAX - 10, 50, 50);
    assert_eq!(rect.right(), i32::MAX);
    assert_eq!(rect.bottom(), i32::MAX);
    assert_eq!(rect.center_x(), i32::MAX);

    let floor = Rect::new(0, 640, 1280, 80);
    assert!(!rect.intersects(&floor));
}
