use draftkit_core::geometry::{Point2, Rect2};
use draftkit_core::shape::{BaseShape, PointShape, TextShape};

use super::{first_point_hit, scaled_box, BoundsRegistry, ShapeBounds};

/// Bounds handler for text shapes. The layout box is the interactive
/// area; glyph geometry is a renderer concern.
pub struct TextBounds;

fn as_text(shape: &BaseShape) -> &TextShape {
    match shape {
        BaseShape::Text(text) => text,
        other => panic!("TextBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for TextBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        let text = as_text(shape);
        first_point_hit(
            registry,
            [&text.top_left, &text.bottom_right],
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
        let text = as_text(shape);
        scaled_box(text.bounding_rect(), text.state, scale).contains(target)
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        _radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        let text = as_text(shape);
        scaled_box(text.bounding_rect(), text.state, scale).intersects_with(&rect)
    }
}
