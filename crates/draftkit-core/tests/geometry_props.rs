//! Property tests for the geometry primitives.

use draftkit_core::geometry::{clip_to_rect, distance_to_segment};
use draftkit_core::{Point2, Rect2};
use proptest::prelude::*;

proptest! {
    #[test]
    fn from_points_is_corner_order_independent(
        x1 in -1000.0f64..1000.0,
        y1 in -1000.0f64..1000.0,
        x2 in -1000.0f64..1000.0,
        y2 in -1000.0f64..1000.0,
    ) {
        let base = Rect2::from_points(x1, y1, x2, y2);
        prop_assert_eq!(Rect2::from_points(x2, y2, x1, y1), base);
        prop_assert_eq!(Rect2::from_points(x1, y2, x2, y1), base);
        prop_assert_eq!(Rect2::from_points(x2, y1, x1, y2), base);
    }

    #[test]
    fn from_points_never_yields_negative_extent(
        x1 in -1000.0f64..1000.0,
        y1 in -1000.0f64..1000.0,
        x2 in -1000.0f64..1000.0,
        y2 in -1000.0f64..1000.0,
    ) {
        let rect = Rect2::from_points(x1, y1, x2, y2);
        prop_assert!(rect.width >= 0.0);
        prop_assert!(rect.height >= 0.0);
        prop_assert!(rect.contains(rect.center()));
    }

    #[test]
    fn segment_distance_is_zero_at_the_endpoints(
        ax in -1000i32..1000,
        ay in -1000i32..1000,
        bx in -1000i32..1000,
        by in -1000i32..1000,
    ) {
        let a = Point2::new(ax as f64, ay as f64);
        let b = Point2::new(bx as f64, by as f64);
        prop_assert_eq!(distance_to_segment(a, b, a), 0.0);
        prop_assert_eq!(distance_to_segment(a, b, b), 0.0);
    }

    #[test]
    fn clip_keeps_a_fully_inside_segment(
        coords in proptest::array::uniform4(-100i32..100),
    ) {
        let a = Point2::new(coords[0] as f64, coords[1] as f64);
        let b = Point2::new(coords[2] as f64, coords[3] as f64);
        let rect = Rect2::new(-200.0, -200.0, 400.0, 400.0);
        prop_assert_eq!(clip_to_rect(a, b, &rect), Some((a, b)));
    }

    #[test]
    fn clip_rejects_a_segment_beyond_one_edge(
        coords in proptest::array::uniform4(-100i32..100),
    ) {
        // Both endpoints share the "right of rect" outcode.
        let a = Point2::new(coords[0] as f64 + 1000.0, coords[1] as f64);
        let b = Point2::new(coords[2] as f64 + 1000.0, coords[3] as f64);
        let rect = Rect2::new(-200.0, -200.0, 400.0, 400.0);
        prop_assert_eq!(clip_to_rect(a, b, &rect), None);
    }
}
