//! Segment math shared by the hit-testing handlers.

use super::point::Point2;
use super::rect::Rect2;

/// Returns the point on segment `ab` nearest to `p`.
///
/// Projects `p` onto the infinite line through `ab` and clamps the
/// parameter to `[0, 1]`. A zero-length segment yields `a`.
pub fn nearest_on_segment(a: Point2, b: Point2, p: Point2) -> Point2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return a;
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    Point2::new(a.x + t * dx, a.y + t * dy)
}

/// Distance from `p` to the segment `ab`.
pub fn distance_to_segment(a: Point2, b: Point2, p: Point2) -> f64 {
    nearest_on_segment(a, b, p).distance_to(&p)
}

const ABOVE: u8 = 1;
const BELOW: u8 = 2;
const LEFT: u8 = 4;
const RIGHT: u8 = 8;

fn outcode(rect: &Rect2, x: f64, y: f64) -> u8 {
    let mut code = 0;
    if x < rect.left() {
        code |= LEFT;
    } else if x > rect.right() {
        code |= RIGHT;
    }
    if y < rect.top() {
        code |= ABOVE;
    } else if y > rect.bottom() {
        code |= BELOW;
    }
    code
}

/// Cohen-Sutherland clip of segment `ab` against `rect`.
///
/// Returns the portion of the segment inside the rectangle, or `None`
/// when the segment misses it entirely. A segment fully inside comes back
/// unchanged. Marquee overlap tests only care whether the result is
/// `Some`; the clipped endpoints are kept for callers that draw them.
pub fn clip_to_rect(a: Point2, b: Point2, rect: &Rect2) -> Option<(Point2, Point2)> {
    let (mut x0, mut y0) = (a.x, a.y);
    let (mut x1, mut y1) = (b.x, b.y);
    let mut code0 = outcode(rect, x0, y0);
    let mut code1 = outcode(rect, x1, y1);

    loop {
        if code0 | code1 == 0 {
            return Some((Point2::new(x0, y0), Point2::new(x1, y1)));
        }
        if code0 & code1 != 0 {
            return None;
        }

        // Clamp the endpoint that is outside to the boundary it crosses.
        let out = if code0 != 0 { code0 } else { code1 };
        let (x, y);
        if out & ABOVE != 0 {
            x = x0 + (x1 - x0) * (rect.top() - y0) / (y1 - y0);
            y = rect.top();
        } else if out & BELOW != 0 {
            x = x0 + (x1 - x0) * (rect.bottom() - y0) / (y1 - y0);
            y = rect.bottom();
        } else if out & RIGHT != 0 {
            y = y0 + (y1 - y0) * (rect.right() - x0) / (x1 - x0);
            x = rect.right();
        } else {
            y = y0 + (y1 - y0) * (rect.left() - x0) / (x1 - x0);
            x = rect.left();
        }

        if out == code0 {
            x0 = x;
            y0 = y;
            code0 = outcode(rect, x0, y0);
        } else {
            x1 = x;
            y1 = y;
            code1 = outcode(rect, x1, y1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_projects_onto_segment() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        let n = nearest_on_segment(a, b, Point2::new(4.0, 3.0));
        assert_eq!(n, Point2::new(4.0, 0.0));
    }

    #[test]
    fn test_nearest_clamps_to_endpoints() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        assert_eq!(nearest_on_segment(a, b, Point2::new(-5.0, 2.0)), a);
        assert_eq!(nearest_on_segment(a, b, Point2::new(15.0, 2.0)), b);
    }

    #[test]
    fn test_nearest_degenerate_segment() {
        let a = Point2::new(3.0, 3.0);
        assert_eq!(nearest_on_segment(a, a, Point2::new(9.0, 9.0)), a);
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        assert_eq!(distance_to_segment(a, b, Point2::new(5.0, 2.0)), 2.0);
        assert_eq!(distance_to_segment(a, b, Point2::new(13.0, 4.0)), 5.0);
    }

    #[test]
    fn test_clip_segment_inside() {
        let rect = Rect2::new(0.0, 0.0, 10.0, 10.0);
        let a = Point2::new(2.0, 2.0);
        let b = Point2::new(8.0, 8.0);
        assert_eq!(clip_to_rect(a, b, &rect), Some((a, b)));
    }

    #[test]
    fn test_clip_segment_crossing() {
        let rect = Rect2::new(0.0, 0.0, 10.0, 10.0);
        let clipped = clip_to_rect(Point2::new(-5.0, 5.0), Point2::new(15.0, 5.0), &rect);
        let (p, q) = clipped.unwrap();
        assert_eq!(p, Point2::new(0.0, 5.0));
        assert_eq!(q, Point2::new(10.0, 5.0));
    }

    #[test]
    fn test_clip_segment_outside() {
        let rect = Rect2::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            clip_to_rect(Point2::new(-5.0, -1.0), Point2::new(15.0, -1.0), &rect),
            None
        );
        // Both endpoints outside on different sides, segment passing clear
        // of the corner.
        assert_eq!(
            clip_to_rect(Point2::new(-2.0, 4.0), Point2::new(4.0, -2.0), &rect),
            None
        );
    }

    #[test]
    fn test_clip_segment_through_corner_region() {
        let rect = Rect2::new(0.0, 0.0, 10.0, 10.0);
        // Endpoints outside, diagonal cuts the corner.
        let clipped = clip_to_rect(Point2::new(-2.0, 8.0), Point2::new(8.0, -2.0), &rect);
        assert!(clipped.is_some());
    }
}
