use draftkit_core::geometry::{clip_to_rect, distance_to_segment, Point2, Rect2};
use draftkit_core::shape::{BaseShape, LineShape, PointShape};

use super::{first_point_hit, segment_endpoints, BoundsRegistry, ShapeBounds};

/// Bounds handler for lines. A line is hit when the target is strictly
/// closer than `radius` to the segment; a target at exactly `radius`
/// misses.
pub struct LineBounds;

fn as_line(shape: &BaseShape) -> &LineShape {
    match shape {
        BaseShape::Line(line) => line,
        other => panic!("LineBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for LineBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        let line = as_line(shape);
        first_point_hit(registry, [&line.start, &line.end], target, radius, scale)
    }

    fn contains(
        &self,
        shape: &BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        let line = as_line(shape);
        let (a, b) = segment_endpoints(&line.start, &line.end, line.state, scale);
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
        let line = as_line(shape);
        let (a, b) = segment_endpoints(&line.start, &line.end, line.state, scale);
        clip_to_rect(a, b, &rect).is_some()
    }
}
