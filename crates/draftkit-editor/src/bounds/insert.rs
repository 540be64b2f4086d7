use draftkit_core::geometry::{Point2, Rect2};
use draftkit_core::shape::{BaseShape, InsertShape, PointShape};

use super::{point_hit, BoundsRegistry, ShapeBounds};

/// Bounds handler for block inserts.
///
/// Block contents live in block-local coordinates, so the query target
/// is translated by the insert origin before delegating to the block's
/// children (in reverse order, topmost first). Control-point lookup
/// exposes the insert's own connectors, which live in document
/// coordinates.
pub struct InsertBounds;

fn as_insert(shape: &BaseShape) -> &InsertShape {
    match shape {
        BaseShape::Insert(insert) => insert,
        other => panic!("InsertBounds invoked with {:?} shape", other.kind()),
    }
}

impl ShapeBounds for InsertBounds {
    fn try_get_point<'a>(
        &self,
        shape: &'a BaseShape,
        target: Point2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> Option<&'a PointShape> {
        as_insert(shape)
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
        let insert = as_insert(shape);
        let local = Point2::new(target.x - insert.origin.x, target.y - insert.origin.y);
        insert
            .block
            .shapes
            .iter()
            .rev()
            .any(|child| registry.contains(child, local, radius, scale))
    }

    fn overlaps(
        &self,
        shape: &BaseShape,
        rect: Rect2,
        radius: f64,
        scale: f64,
        registry: &BoundsRegistry,
    ) -> bool {
        let insert = as_insert(shape);
        let local = Rect2::new(
            rect.x - insert.origin.x,
            rect.y - insert.origin.y,
            rect.width,
            rect.height,
        );
        insert
            .block
            .shapes
            .iter()
            .rev()
            .any(|child| registry.overlaps(child, local, radius, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftkit_core::shape::{Block, RectangleShape};
    use draftkit_core::style::Style;
    use std::sync::Arc;

    fn stamp_block() -> Arc<Block> {
        // A 10x10 square at the block origin.
        let square = BaseShape::Rectangle(RectangleShape::create(
            0.0,
            0.0,
            10.0,
            10.0,
            Arc::new(Style::default()),
            false,
        ));
        Arc::new(Block::from_shapes("stamp", vec![square]))
    }

    #[test]
    fn test_contains_translates_by_origin() {
        let insert = InsertShape::new(PointShape::new(100.0, 50.0), stamp_block());
        let shape = BaseShape::Insert(insert);
        let r = BoundsRegistry::default();
        assert!(r.contains(&shape, Point2::new(105.0, 55.0), 2.0, 1.0));
        assert!(!r.contains(&shape, Point2::new(5.0, 5.0), 2.0, 1.0));
    }

    #[test]
    fn test_overlaps_translates_marquee() {
        let insert = InsertShape::new(PointShape::new(100.0, 50.0), stamp_block());
        let shape = BaseShape::Insert(insert);
        let r = BoundsRegistry::default();
        assert!(r.overlaps(&shape, Rect2::new(95.0, 45.0, 20.0, 20.0), 2.0, 1.0));
        assert!(!r.overlaps(&shape, Rect2::new(0.0, 0.0, 20.0, 20.0), 2.0, 1.0));
    }

    #[test]
    fn test_same_block_hits_at_each_placement() {
        let block = stamp_block();
        let a = BaseShape::Insert(InsertShape::new(PointShape::new(0.0, 0.0), block.clone()));
        let b = BaseShape::Insert(InsertShape::new(PointShape::new(200.0, 0.0), block));
        let r = BoundsRegistry::default();
        assert!(r.contains(&a, Point2::new(5.0, 5.0), 2.0, 1.0));
        assert!(r.contains(&b, Point2::new(205.0, 5.0), 2.0, 1.0));
        assert!(!r.contains(&b, Point2::new(5.0, 5.0), 2.0, 1.0));
    }
}
