use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::point::PointShape;
use crate::state::ShapeState;
use crate::style::Style;

/// A straight line segment between two control points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineShape {
    pub start: PointShape,
    pub end: PointShape,
    pub style: Arc<Style>,
    pub is_stroked: bool,
    pub state: ShapeState,
}

impl LineShape {
    pub fn new(start: PointShape, end: PointShape, style: Arc<Style>, is_stroked: bool) -> Self {
        Self {
            start,
            end,
            style,
            is_stroked,
            state: ShapeState::default(),
        }
    }

    /// Convenience constructor from raw coordinates.
    pub fn create(x1: f64, y1: f64, x2: f64, y2: f64, style: Arc<Style>) -> Self {
        Self::new(
            PointShape::new(x1, y1),
            PointShape::new(x2, y2),
            style,
            true,
        )
    }
}
