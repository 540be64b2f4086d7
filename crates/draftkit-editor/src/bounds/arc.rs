use draftkit_core::geometry::{Point2, Rect2};
use draftkit_core::shape::{ArcShape, BaseShape, PointShape};

use super::{first_point_hit, scaled_box, BoundsRegistry, ShapeBounds};

/// Bounds handler for arcs.
///
/// Tests against the square bounding box of the arc's full circle
/// (center at the `point1`/`point2` midpoint, radius from `point1`),
/// regardless of the swept portion. Kept as observed editor behaviour.
pub struct ArcBounds;

fn as_arc(shape: &BaseShape) -> &ArcShape {
    match shape {
        BaseShape::Arc(arc) => arc,
        other => panic!("ArcBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for ArcBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        let arc = as_arc(shape);
        first_point_hit(
            registry,
            [&arc.point1, &arc.point2, &arc.point3, &arc.point4],
            target,
            radius,
            scale,
        )
    }

    fn contains(
        &self,
        shape: &BaseShape,
        target: Point2,
        _radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        let arc = as_arc(shape);
        scaled_box(arc.bounding_rect(), arc.state, scale).contains(target)
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        _radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        let arc = as_arc(shape);
        scaled_box(arc.bounding_rect(), arc.state, scale).intersects_with(&rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftkit_core::style::Style;
    use std::sync::Arc as StdArc;

    #[test]
    fn test_full_circle_box_ignores_swept_portion() {
        let style = StdArc::new(Style::default());
        let shape = BaseShape::Arc(ArcShape::new(
            PointShape::new(0.0, 0.0),
            PointShape::new(10.0, 0.0),
            PointShape::new(5.0, 5.0),
            PointShape::new(5.0, -5.0),
            style,
            true,
            false,
        ));
        let r = BoundsRegistry::default();
        // Box is the circle's square: [0, -5] to [10, 5].
        assert!(r.contains(&shape, Point2::new(1.0, -4.0), 2.0, 1.0));
        assert!(r.contains(&shape, Point2::new(9.0, 4.0), 2.0, 1.0));
        assert!(!r.contains(&shape, Point2::new(11.0, 0.0), 2.0, 1.0));
    }
}
