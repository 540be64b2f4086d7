use draftkit_core::geometry::{Point2, Rect2};
use draftkit_core::shape::{BaseShape, ImageShape, PointShape};

use super::{first_point_hit, scaled_box, BoundsRegistry, ShapeBounds};

/// Bounds handler for placed images. The placement box is the
/// interactive area.
pub struct ImageBounds;

fn as_image(shape: &BaseShape) -> &ImageShape {
    match shape {
        BaseShape::Image(image) => image,
        other => panic!("ImageBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for ImageBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        let image = as_image(shape);
        first_point_hit(
            registry,
            [&image.top_left, &image.bottom_right],
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
        let image = as_image(shape);
        scaled_box(image.bounding_rect(), image.state, scale).contains(target)
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        _radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        let image = as_image(shape);
        scaled_box(image.bounding_rect(), image.state, scale).intersects_with(&rect)
    }
}
