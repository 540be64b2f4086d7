use draftkit_core::geometry::{polygon, Point2, Rect2};
use draftkit_core::shape::{BaseShape, CubicBezierShape, PointShape};

use super::{first_point_hit, BoundsRegistry, ShapeBounds};

/// Bounds handler for cubic Bézier curves. The curve is sampled into a
/// polyline and tested as a closed polygon.
pub struct CubicBezierBounds;

fn as_cubic(shape: &BaseShape) -> &CubicBezierShape {
    match shape {
        BaseShape::CubicBezier(cubic) => cubic,
        other => panic!("CubicBezierBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for CubicBezierBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        let cubic = as_cubic(shape);
        first_point_hit(
            registry,
            [&cubic.point1, &cubic.point2, &cubic.point3, &cubic.point4],
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
        polygon::contains_point(&as_cubic(shape).points(), target)
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        _radius: f64,
        _scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        polygon::overlaps_rect(&as_cubic(shape).points(), &rect)
    }
}
