use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::point::PointShape;
use crate::geometry::{Point2, Rect2};
use crate::state::ShapeState;
use crate::style::Style;

/// A circular arc defined by four control points.
///
/// `point1`/`point2` span the arc's circle: the center is their midpoint
/// and the radius is the distance from `point1` to that center.
/// `point3`/`point4` pick the start and end of the swept portion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcShape {
    pub point1: PointShape,
    pub point2: PointShape,
    pub point3: PointShape,
    pub point4: PointShape,
    pub style: Arc<Style>,
    pub is_stroked: bool,
    pub is_filled: bool,
    pub state: ShapeState,
}

impl ArcShape {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        point1: PointShape,
        point2: PointShape,
        point3: PointShape,
        point4: PointShape,
        style: Arc<Style>,
        is_stroked: bool,
        is_filled: bool,
    ) -> Self {
        Self {
            point1,
            point2,
            point3,
            point4,
            style,
            is_stroked,
            is_filled,
            state: ShapeState::default(),
        }
    }

    /// Center of the arc's circle: the midpoint of `point1` and `point2`.
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.point1.x + self.point2.x) / 2.0,
            (self.point1.y + self.point2.y) / 2.0,
        )
    }

    /// Radius of the arc's circle.
    pub fn radius(&self) -> f64 {
        self.point1.position().distance_to(&self.center())
    }

    /// Square bounding box of the full circle, ignoring which portion is
    /// actually swept. Hit testing deliberately uses this box.
    pub fn bounding_rect(&self) -> Rect2 {
        let center = self.center();
        let radius = self.radius();
        Rect2::square(center, radius)
    }
}
