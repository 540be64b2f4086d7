use serde::{Deserialize, Serialize};

use super::point::Point2;

/// An axis-aligned rectangle in document coordinates.
///
/// Width and height are never negative; every constructor normalizes the
/// corner order. Zero-area rectangles are valid (a freshly started
/// rectangle shape has both corners on the anchor click).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect2 {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect2 {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the rectangle spanned by two corner points, in any order.
    ///
    /// ```text
    /// x = min(x1, x2)    width  = |x2 - x1|
    /// y = min(y1, y2)    height = |y2 - y1|
    /// ```
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Tests whether a point lies inside the rectangle. Edges count as
    /// inside.
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Tests whether two rectangles share any area. Touching edges count
    /// as intersecting.
    pub fn intersects_with(&self, other: &Rect2) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Scales the rectangle about its center.
    ///
    /// ```text
    /// width'  = width * scale
    /// height' = height * scale
    /// ```
    ///
    /// Used for zoom-dependent hit targets: a shape flagged
    /// [`ShapeState::SIZE`](crate::state::ShapeState) keeps a constant
    /// on-screen hit area, so its document-space hit rectangle grows or
    /// shrinks with the view scale.
    pub fn inflate(&self, scale: f64) -> Rect2 {
        let width = self.width * scale;
        let height = self.height * scale;
        Rect2 {
            x: self.x + (self.width - width) / 2.0,
            y: self.y + (self.height - height) / 2.0,
            width,
            height,
        }
    }

    /// The square of half-width `radius` centered on `center`.
    pub fn square(center: Point2, radius: f64) -> Rect2 {
        Rect2 {
            x: center.x - radius,
            y: center.y - radius,
            width: radius * 2.0,
            height: radius * 2.0,
        }
    }
}

impl std::fmt::Display for Rect2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3} {:.3}x{:.3}]",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_normalizes_corner_order() {
        let a = Rect2::from_points(10.0, 20.0, 30.0, 40.0);
        let b = Rect2::from_points(30.0, 40.0, 10.0, 20.0);
        let c = Rect2::from_points(10.0, 40.0, 30.0, 20.0);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.x, 10.0);
        assert_eq!(a.y, 20.0);
        assert_eq!(a.width, 20.0);
        assert_eq!(a.height, 20.0);
    }

    #[test]
    fn test_degenerate_rect_is_valid() {
        let r = Rect2::from_points(5.0, 5.0, 5.0, 5.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
        assert!(r.contains(Point2::new(5.0, 5.0)));
    }

    #[test]
    fn test_contains_edges() {
        let r = Rect2::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point2::new(0.0, 0.0)));
        assert!(r.contains(Point2::new(10.0, 10.0)));
        assert!(r.contains(Point2::new(5.0, 10.0)));
        assert!(!r.contains(Point2::new(10.001, 5.0)));
    }

    #[test]
    fn test_intersects() {
        let r = Rect2::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.intersects_with(&Rect2::new(5.0, 5.0, 10.0, 10.0)));
        assert!(r.intersects_with(&Rect2::new(10.0, 10.0, 5.0, 5.0)));
        assert!(!r.intersects_with(&Rect2::new(10.5, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_inflate_preserves_center() {
        let r = Rect2::new(0.0, 0.0, 10.0, 20.0);
        let grown = r.inflate(2.0);
        assert_eq!(grown.center(), r.center());
        assert_eq!(grown.width, 20.0);
        assert_eq!(grown.height, 40.0);
        let shrunk = r.inflate(0.5);
        assert_eq!(shrunk.center(), r.center());
        assert_eq!(shrunk.width, 5.0);
    }

    #[test]
    fn test_square() {
        let s = Rect2::square(Point2::new(3.0, 4.0), 2.0);
        assert_eq!(s, Rect2::new(1.0, 2.0, 4.0, 4.0));
    }
}
