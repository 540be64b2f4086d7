use draftkit_core::geometry::{Point2, Rect2};
use draftkit_core::shape::{BaseShape, GroupShape, PointShape};

use super::{point_hit, BoundsRegistry, ShapeBounds};

/// Bounds handler for groups.
///
/// Children are scanned in reverse declaration order so the topmost
/// (last added) child wins ties. Control-point lookup exposes the
/// group's connectors, not the child shapes' points.
pub struct GroupBounds;

fn as_group(shape: &BaseShape) -> &GroupShape {
    match shape {
        BaseShape::Group(group) => group,
        other => panic!("GroupBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for GroupBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        as_group(shape)
            .connectors
            .iter()
            .rev()
            .find(|connector| point_hit(registry, connector, target, radius, scale))
    }

    fn contains(
        &self,
        shape: &BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> bool {
        as_group(shape)
            .shapes
            .iter()
            .rev()
            .any(|child| registry.contains(child, target, radius, scale))
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> bool {
        as_group(shape)
            .shapes
            .iter()
            .rev()
            .any(|child| registry.overlaps(child, rect, radius, scale))
    }
}
