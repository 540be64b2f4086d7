use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::BaseShape;
use crate::geometry::Point2;
use crate::state::ShapeState;

/// A control point.
///
/// Every other shape is defined by `PointShape`s: line endpoints,
/// rectangle corners, Bézier control points, group connectors. The
/// optional template is the marker shape a renderer draws at the point's
/// position (typically a small cross or ellipse from the container).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointShape {
    pub x: f64,
    pub y: f64,
    pub state: ShapeState,
    pub template: Option<Arc<BaseShape>>,
}

impl PointShape {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            state: ShapeState::default(),
            template: None,
        }
    }

    pub fn with_template(x: f64, y: f64, template: Arc<BaseShape>) -> Self {
        Self {
            x,
            y,
            state: ShapeState::default(),
            template: Some(template),
        }
    }

    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn distance_to(&self, other: &PointShape) -> f64 {
        self.position().distance_to(&other.position())
    }
}
