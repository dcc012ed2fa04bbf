//! Axis-aligned rectangles for layout regions
//!
//! A rectangle is its min corner plus a size, in canvas pixels with y
//! pointing down. Edges are half-open: a rect covers `[min, min + size)`, so
//! two rects that merely share an edge do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Build from two corners
    pub fn from_bounds(min: Vec2, max: Vec2) -> Self {
        Self {
            min,
            size: max - min,
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Center point (where centered text is anchored)
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Same size, shifted by `delta`
    pub fn moved(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            size: self.size,
        }
    }

    /// Shrink each edge independently
    pub fn inset(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: self.min + Vec2::new(left, top),
            size: self.size - Vec2::new(left + right, top + bottom),
        }
    }

    /// True if the interiors intersect
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }

    /// True if the vertical spans intersect, ignoring x
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.min.y < other.max().y && other.min.y < self.max().y
    }

    /// True if `other` lies entirely inside this rect
    pub fn contains_rect(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        other.min.x >= self.min.x && other.min.y >= self.min.y && b_max.x <= a_max.x && b_max.y <= a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 30.0);
        let b = Rect::new(0.0, 30.0, 100.0, 30.0);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps_vertically(&b));
        assert!(a.overlaps(&Rect::new(50.0, 29.0, 10.0, 10.0)));
    }

    #[test]
    fn test_moved_keeps_size() {
        let r = Rect::new(0.0, 400.0, 140.0, 100.0).moved(Vec2::new(150.0, 0.0));
        assert_eq!(r.min, Vec2::new(150.0, 400.0));
        assert_eq!(r.size, Vec2::new(140.0, 100.0));
    }

    #[test]
    fn test_inset_and_contains() {
        let row = Rect::new(0.0, 120.0, 480.0, 30.0);
        let hl = row.inset(80.0, 2.0, 80.0, 1.0);
        assert_eq!(hl, Rect::new(80.0, 122.0, 320.0, 27.0));
        assert!(row.contains_rect(&hl));
        assert!(!hl.contains_rect(&row));
    }

    #[test]
    fn test_from_bounds() {
        let r = Rect::from_bounds(Vec2::new(10.0, 20.0), Vec2::new(30.0, 60.0));
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 40.0);
        assert_eq!(r.center(), Vec2::new(20.0, 40.0));
    }
}
