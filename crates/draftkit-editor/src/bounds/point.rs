use draftkit_core::geometry::{Point2, Rect2};
use draftkit_core::shape::{BaseShape, PointShape};

use super::{point_rect, BoundsRegistry, ShapeBounds};

/// Bounds handler for free-standing points. A point's interactive area
/// is the square of half-width `radius` around it.
///
/// Every other handler's control-point lookup delegates here through
/// the registry, so this handler defines the point-hit rule for the
/// whole registry.
pub struct PointBounds;

fn as_point(shape: &BaseShape) -> &PointShape {
    match shape {
        BaseShape::Point(point) => point,
        other => panic!("PointBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for PointBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        let point = as_point(shape);
        point_rect(point, radius, scale)
            .contains(target)
            .then_some(point)
    }

    fn contains(
        &self,
        shape: &BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        point_rect(as_point(shape), radius, scale).contains(target)
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        radius: f64,
        scale: f64,
        _registry: &BoundsRegistry,
    ) -> bool {
        point_rect(as_point(shape), radius, scale).intersects_with(&rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftkit_core::state::ShapeState;

    fn registry() -> BoundsRegistry {
        BoundsRegistry::default()
    }

    #[test]
    fn test_contains_within_radius_square() {
        let shape = BaseShape::Point(PointShape::new(10.0, 10.0));
        let r = registry();
        assert!(r.contains(&shape, Point2::new(10.0, 10.0), 3.0, 1.0));
        assert!(r.contains(&shape, Point2::new(12.9, 7.1), 3.0, 1.0));
        assert!(!r.contains(&shape, Point2::new(13.5, 10.0), 3.0, 1.0));
    }

    #[test]
    fn test_size_flag_divides_radius_by_scale() {
        let mut point = PointShape::new(0.0, 0.0);
        point.state.insert(ShapeState::SIZE);
        let shape = BaseShape::Point(point);
        let r = registry();
        // Zoomed in 2x: hit square shrinks to radius/2 in document units.
        assert!(r.contains(&shape, Point2::new(1.9, 0.0), 4.0, 2.0));
        assert!(!r.contains(&shape, Point2::new(2.1, 0.0), 4.0, 2.0));
        // Without the flag the scale is ignored.
        let plain = BaseShape::Point(PointShape::new(0.0, 0.0));
        assert!(r.contains(&plain, Point2::new(3.9, 0.0), 4.0, 2.0));
    }

    #[test]
    fn test_try_get_point_returns_self() {
        let shape = BaseShape::Point(PointShape::new(5.0, 5.0));
        let r = registry();
        let hit = r.try_get_point(&shape, Point2::new(6.0, 4.0), 2.0, 1.0);
        assert!(hit.is_some());
        assert_eq!(hit.unwrap().position(), Point2::new(5.0, 5.0));
        assert!(r
            .try_get_point(&shape, Point2::new(9.0, 4.0), 2.0, 1.0)
            .is_none());
    }

    #[test]
    #[should_panic(expected = "PointBounds invoked with")]
    fn test_wrong_variant_panics() {
        let shape = BaseShape::Group(draftkit_core::shape::GroupShape::new("g"));
        PointBounds.contains(&shape, Point2::new(0.0, 0.0), 1.0, 1.0, &registry());
    }
}
