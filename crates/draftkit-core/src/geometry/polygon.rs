//! Point-in-polygon and polygon/rectangle overlap tests.
//!
//! Curved shapes are hit-tested against a sampled polyline of the curve,
//! so these run on arbitrary point sets, closed implicitly from the last
//! point back to the first.

use super::line::clip_to_rect;
use super::point::Point2;
use super::rect::Rect2;

/// Even-odd (crossing number) point-in-polygon test.
///
/// Casts a ray from `p` in +x and counts edge crossings. An empty or
/// degenerate point set contains nothing.
pub fn contains_point(points: &[Point2], p: Point2) -> bool {
    if points.is_empty() {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (pi, pj) = (points[i], points[j]);
        if ((pi.y > p.y) != (pj.y > p.y))
            && (p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Tests whether the closed polygon over `points` overlaps `rect`.
///
/// True when any vertex lies in the rectangle, any rectangle corner lies
/// in the polygon (rectangle fully enclosed), or any polygon edge crosses
/// the rectangle.
pub fn overlaps_rect(points: &[Point2], rect: &Rect2) -> bool {
    if points.is_empty() {
        return false;
    }
    if points.iter().any(|p| rect.contains(*p)) {
        return true;
    }
    let corners = [
        Point2::new(rect.left(), rect.top()),
        Point2::new(rect.right(), rect.top()),
        Point2::new(rect.right(), rect.bottom()),
        Point2::new(rect.left(), rect.bottom()),
    ];
    if corners.iter().any(|c| contains_point(points, *c)) {
        return true;
    }
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        if clip_to_rect(points[j], points[i], rect).is_some() {
            return true;
        }
        j = i;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 10.0),
        ]
    }

    #[test]
    fn test_contains_interior_point() {
        assert!(contains_point(&triangle(), Point2::new(5.0, 3.0)));
    }

    #[test]
    fn test_rejects_exterior_point() {
        assert!(!contains_point(&triangle(), Point2::new(0.0, 9.0)));
        assert!(!contains_point(&triangle(), Point2::new(-1.0, 1.0)));
    }

    #[test]
    fn test_empty_and_degenerate_sets_contain_nothing() {
        assert!(!contains_point(&[], Point2::new(0.0, 0.0)));
        let segment = [Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
        assert!(!contains_point(&segment, Point2::new(5.0, 1.0)));
    }

    #[test]
    fn test_overlaps_disjoint_rect() {
        let rect = Rect2::new(20.0, 20.0, 5.0, 5.0);
        assert!(!overlaps_rect(&triangle(), &rect));
    }

    #[test]
    fn test_overlaps_enclosing_rect() {
        let rect = Rect2::new(-5.0, -5.0, 30.0, 30.0);
        assert!(overlaps_rect(&triangle(), &rect));
    }

    #[test]
    fn test_overlaps_rect_inside_polygon() {
        let rect = Rect2::new(4.0, 2.0, 2.0, 2.0);
        assert!(overlaps_rect(&triangle(), &rect));
    }

    #[test]
    fn test_overlaps_edge_crossing() {
        // Rectangle straddles the base edge without containing a vertex.
        let rect = Rect2::new(4.0, -1.0, 2.0, 1.5);
        assert!(overlaps_rect(&triangle(), &rect));
    }
}
