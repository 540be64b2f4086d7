use draftkit_core::geometry::{clip_to_rect, distance_to_segment, Point2, Rect2};
use draftkit_core::shape::{BaseShape, PointShape, WireShape};

use super::{first_point_hit, segment_endpoints, BoundsRegistry, ShapeBounds};

/// Bounds handler for wires. Geometry is identical to lines: strict
/// `< radius` distance to the segment.
pub struct WireBounds;

fn as_wire(shape: &BaseShape) -> &WireShape {
    match shape {
        BaseShape::Wire(wire) => wire,
        other => panic!("WireBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for WireBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        let wire = as_wire(shape);
        first_point_hit(registry, [&wire.start, &wire.end], target, radius, scale)
    }

    fn contains(
        &self,
        shape: &BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        let wire = as_wire(shape);
        let (a, b) = segment_endpoints(&wire.start, &wire.end, wire.state, scale);
        distance_to_segment(a, b, target) < radius
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        _radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        let wire = as_wire(shape);
        let (a, b) = segment_endpoints(&wire.start, &wire.end, wire.state, scale);
        clip_to_rect(a, b, &rect).is_some()
    }
}
