//! Property tests for grid snapping and hit boundaries.

use std::sync::Arc;

use draftkit_core::{BaseShape, CubicBezierShape, LineShape, Point2, PointShape, Rect2, Style};
use draftkit_editor::{snap, BoundsRegistry};
use proptest::prelude::*;

proptest! {
    // Steps are powers of two so every grid multiple in range is exact
    // in f64 and the assertions hold with equality.
    #[test]
    fn snap_is_idempotent(
        value in -1_000_000.0f64..1_000_000.0,
        exp in -3i32..6,
    ) {
        let step = 2f64.powi(exp);
        let once = snap(value, step);
        prop_assert_eq!(snap(once, step), once);
    }

    #[test]
    fn snap_lands_on_a_grid_multiple(
        value in -1_000_000.0f64..1_000_000.0,
        exp in -3i32..6,
    ) {
        let step = 2f64.powi(exp);
        let snapped = snap(value, step);
        prop_assert_eq!(snapped % step, 0.0);
        prop_assert!((snapped - value).abs() <= step);
    }

    #[test]
    fn snap_picks_the_nearest_multiple_for_non_negative_values(
        value in 0.0f64..1_000_000.0,
        exp in -3i32..6,
    ) {
        let step = 2f64.powi(exp);
        prop_assert!((snap(value, step) - value).abs() <= step / 2.0);
    }

    #[test]
    fn snap_ties_round_up(n in 0u32..1000, exp in -3i32..6) {
        let step = 2f64.powi(exp);
        let value = n as f64 * step + step / 2.0;
        prop_assert_eq!(snap(value, step), (n + 1) as f64 * step);
    }

    #[test]
    fn line_hit_is_strict_at_the_radius(
        x1 in -100i32..100,
        y1 in -100i32..100,
        len in 1i32..50,
        radius in 1i32..5,
    ) {
        let registry = BoundsRegistry::default();
        let (x1, y1) = (x1 as f64, y1 as f64);
        let line = BaseShape::Line(LineShape::create(
            x1,
            y1,
            x1 + len as f64,
            y1,
            Arc::new(Style::default()),
        ));
        let mid_x = x1 + len as f64 / 2.0;
        let radius = radius as f64;

        // A target exactly `radius` off the segment misses; one unit
        // closer hits.
        let on_edge = Point2::new(mid_x, y1 + radius);
        prop_assert!(!registry.contains(&line, on_edge, radius, 1.0));
        let inside = Point2::new(mid_x, y1 + radius - 1.0);
        prop_assert!(registry.contains(&line, inside, radius, 1.0));
    }

    #[test]
    fn point_hit_square_edge_is_inclusive(
        px in -1000i32..1000,
        py in -1000i32..1000,
        radius in 1i32..10,
    ) {
        let registry = BoundsRegistry::default();
        let shape = BaseShape::Point(PointShape::new(px as f64, py as f64));
        let radius = radius as f64;

        let center = Point2::new(px as f64, py as f64);
        prop_assert!(registry.contains(&shape, center, radius, 1.0));
        let on_edge = Point2::new(px as f64 + radius, py as f64);
        prop_assert!(registry.contains(&shape, on_edge, radius, 1.0));
        let outside = Point2::new(px as f64 + radius + 1.0, py as f64);
        prop_assert!(!registry.contains(&shape, outside, radius, 1.0));
    }

    #[test]
    fn marquee_enclosing_the_control_points_overlaps(
        coords in proptest::array::uniform8(-500i32..500),
    ) {
        let registry = BoundsRegistry::default();
        let style = Arc::new(Style::default());
        let points: Vec<PointShape> = coords
            .chunks(2)
            .map(|c| PointShape::new(c[0] as f64, c[1] as f64))
            .collect();

        let min_x = coords.iter().step_by(2).min().copied().unwrap() as f64;
        let max_x = coords.iter().step_by(2).max().copied().unwrap() as f64;
        let min_y = coords.iter().skip(1).step_by(2).min().copied().unwrap() as f64;
        let max_y = coords.iter().skip(1).step_by(2).max().copied().unwrap() as f64;
        let marquee = Rect2::new(
            min_x - 1.0,
            min_y - 1.0,
            max_x - min_x + 2.0,
            max_y - min_y + 2.0,
        );

        // The sampled curve stays inside the control hull, so a rect
        // enclosing the control points always overlaps.
        let cubic = BaseShape::CubicBezier(CubicBezierShape::new(
            points[0].clone(),
            points[1].clone(),
            points[2].clone(),
            points[3].clone(),
            style.clone(),
            true,
            false,
        ));
        prop_assert!(registry.overlaps(&cubic, marquee, 0.0, 1.0));

        let line = BaseShape::Line(LineShape::new(
            points[0].clone(),
            points[3].clone(),
            style,
            true,
        ));
        prop_assert!(registry.overlaps(&line, marquee, 0.0, 1.0));
    }
}
