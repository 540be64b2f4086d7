use draftkit_core::geometry::{polygon, Point2, Rect2};
use draftkit_core::shape::{BaseShape, PathShape, PointShape};

use super::{point_hit, BoundsRegistry, ShapeBounds};

/// Bounds handler for paths.
///
/// The path is tested as the polygon over its defining points across
/// all figures; curved segments contribute their control points, not a
/// flattened outline.
pub struct PathBounds;

fn as_path(shape: &BaseShape) -> &PathShape {
    match shape {
        BaseShape::Path(path) => path,
        other => panic!("PathBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for PathBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        as_path(shape)
            .control_points()
            .into_iter()
            .find(|point| point_hit(registry, point, target, radius, scale))
    }

    fn contains(
        &self,
        shape: &BaseShape,
        target: Point2,
        _radius: f64,
        _scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        polygon::contains_point(&as_path(shape).points(), target)
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        _radius: f64,
        _scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        polygon::overlaps_rect(&as_path(shape).points(), &rect)
    }
}
