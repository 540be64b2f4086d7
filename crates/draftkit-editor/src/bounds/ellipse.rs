use draftkit_core::geometry::{Point2, Rect2};
use draftkit_core::shape::{BaseShape, EllipseShape, PointShape};

use super::{first_point_hit, scaled_box, BoundsRegistry, ShapeBounds};

/// Bounds handler for ellipses.
///
/// Hit testing uses the ellipse's bounding rectangle, not the true
/// ellipse: points in the box corners outside the curve still count as
/// hits. Kept as observed editor behaviour.
pub struct EllipseBounds;

fn as_ellipse(shape: &BaseShape) -> &EllipseShape {
    match shape {
        BaseShape::Ellipse(ellipse) => ellipse,
        other => panic!("EllipseBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for EllipseBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        let ellipse = as_ellipse(shape);
        first_point_hit(
            registry,
            [&ellipse.top_left, &ellipse.bottom_right],
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
        let ellipse = as_ellipse(shape);
        scaled_box(ellipse.bounding_rect(), ellipse.state, scale).contains(target)
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        _radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        let ellipse = as_ellipse(shape);
        scaled_box(ellipse.bounding_rect(), ellipse.state, scale).intersects_with(&rect)
    }
}
