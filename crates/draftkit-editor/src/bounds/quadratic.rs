use draftkit_core::geometry::{polygon, Point2, Rect2};
use draftkit_core::shape::{BaseShape, PointShape, QuadraticBezierShape};

use super::{first_point_hit, BoundsRegistry, ShapeBounds};

/// Bounds handler for quadratic Bézier curves. Same sampled-polygon
/// scheme as cubics.
pub struct QuadraticBezierBounds;

fn as_quadratic(shape: &BaseShape) -> &QuadraticBezierShape {
    match shape {
        BaseShape::QuadraticBezier(quadratic) => quadratic,
        other => panic!(
            "QuadraticBezierBounds invoked with {:?} shape",
            other.kind()
        ),
    }
}

impl ShapeBounds for QuadraticBezierBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        let quadratic = as_quadratic(shape);
        first_point_hit(
            registry,
            [&quadratic.point1, &quadratic.point2, &quadratic.point3],
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
        _scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        polygon::contains_point(&as_quadratic(shape).points(), target)
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        _radius: f64,
        _scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        polygon::overlaps_rect(&as_quadratic(shape).points(), &rect)
    }
}
