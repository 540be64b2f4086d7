use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::point::PointShape;
use crate::geometry::Rect2;
use crate::state::ShapeState;
use crate::style::Style;

/// An axis-aligned rectangle spanned by two corner points.
///
/// The corners are stored as picked, not normalized; `bounding_rect`
/// normalizes on demand so a rectangle dragged up-left behaves the same
/// as one dragged down-right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleShape {
    pub top_left: PointShape,
    pub bottom_right: PointShape,
    pub style: Arc<Style>,
    pub is_stroked: bool,
    pub is_filled: bool,
    pub state: ShapeState,
}

impl RectangleShape {
    pub fn new(
        top_left: PointShape,
        bottom_right: PointShape,
        style: Arc<Style>,
        is_stroked: bool,
        is_filled: bool,
    ) -> Self {
        Self {
            top_left,
            bottom_right,
            style,
            is_stroked,
            is_filled,
            state: ShapeState::default(),
        }
    }

    pub fn create(x1: f64, y1: f64, x2: f64, y2: f64, style: Arc<Style>, is_filled: bool) -> Self {
        Self::new(
            PointShape::new(x1, y1),
            PointShape::new(x2, y2),
            style,
            true,
            is_filled,
        )
    }

    pub fn bounding_rect(&self) -> Rect2 {
        Rect2::from_points(
            self.top_left.x,
            self.top_left.y,
            self.bottom_right.x,
            self.bottom_right.y,
        )
    }
}
