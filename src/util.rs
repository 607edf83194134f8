//! Geometry helpers shared by the drawing primitives and the mockup layout.
//!
//! This module provides:
//! - [`Rect`], the corner-based bounding box every primitive takes
//! - Ellipse bounding box calculations

// ============================================================================
// Bounding Boxes
// ============================================================================

/// Axis-aligned bounding box given by its top-left and bottom-right corners.
///
/// Coordinates are in canvas pixels. Layout code computes boxes from
/// constants and offsets, so fractional values are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    /// Creates a box from two corners.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Builds a box from its origin and size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Center point of the box.
    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Integer pixel size of the box, truncating fractional edges.
    ///
    /// Returns `None` when either side is shorter than one pixel.
    pub fn pixel_size(&self) -> Option<(i32, i32)> {
        let width = self.width() as i32;
        let height = self.height() as i32;
        if width <= 0 || height <= 0 {
            None
        } else {
            Some((width, height))
        }
    }
}

/// Calculates ellipse parameters from a bounding box.
///
/// # Returns
/// Tuple `(cx, cy, rx, ry)` where:
/// - `cx`, `cy` = center point coordinates
/// - `rx` = horizontal radius (half width)
/// - `ry` = vertical radius (half height)
pub fn ellipse_bounds(bbox: &Rect) -> (f64, f64, f64, f64) {
    let (cx, cy) = bbox.center();
    (cx, cy, bbox.width().abs() / 2.0, bbox.height().abs() / 2.0)
}

/// Bounding box of a circle.
pub fn circle_bounds(cx: f64, cy: f64, radius: f64) -> Rect {
    Rect::new(cx - radius, cy - radius, cx + radius, cy + radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipse_bounds_compute_center_and_radii() {
        let (cx, cy, rx, ry) = ellipse_bounds(&Rect::new(0.0, 0.0, 10.0, 4.0));
        assert_eq!((cx, cy, rx, ry), (5.0, 2.0, 5.0, 2.0));
    }

    #[test]
    fn pixel_size_rejects_empty_boxes() {
        assert_eq!(Rect::new(0.0, 0.0, 0.0, 10.0).pixel_size(), None);
        assert_eq!(Rect::new(5.0, 5.0, 2.0, 9.0).pixel_size(), None);
        assert_eq!(Rect::new(0.0, 0.0, 0.5, 10.0).pixel_size(), None);
    }

    #[test]
    fn pixel_size_truncates_fractional_width() {
        let card = Rect::from_origin_size(138.0, 200.0, 152.0, 170.0);
        assert_eq!(card.pixel_size(), Some((152, 170)));
        let odd = Rect::new(10.0, 0.0, 25.5, 3.0);
        assert_eq!(odd.pixel_size(), Some((15, 3)));
    }

    #[test]
    fn circle_bounds_is_centered() {
        let bbox = circle_bounds(100.0, 50.0, 35.0);
        assert_eq!(bbox.center(), (100.0, 50.0));
        assert_eq!(bbox.width(), 70.0);
        assert_eq!(bbox.pixel_size(), Some((70, 70)));
    }
}
