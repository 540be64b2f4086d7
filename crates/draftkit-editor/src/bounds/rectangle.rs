use draftkit_core::geometry::{Point2, Rect2};
use draftkit_core::shape::{BaseShape, PointShape, RectangleShape};

use super::{first_point_hit, scaled_box, BoundsRegistry, ShapeBounds};

/// Bounds handler for rectangles.
pub struct RectangleBounds;

fn as_rectangle(shape: &BaseShape) -> &RectangleShape {
    match shape {
        BaseShape::Rectangle(rectangle) => rectangle,
        other => panic!("RectangleBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for RectangleBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        let rectangle = as_rectangle(shape);
        first_point_hit(
            registry,
            [&rectangle.top_left, &rectangle.bottom_right],
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
        let rectangle = as_rectangle(shape);
        scaled_box(rectangle.bounding_rect(), rectangle.state, scale).contains(target)
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        _radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        let rectangle = as_rectangle(shape);
        scaled_box(rectangle.bounding_rect(), rectangle.state, scale).intersects_with(&rect)
    }
}
