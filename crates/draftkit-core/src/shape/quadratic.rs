use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::point::PointShape;
use crate::geometry::Point2;
use crate::state::ShapeState;
use crate::style::Style;

/// A quadratic Bézier curve: endpoints `point1`/`point3`, control point
/// `point2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadraticBezierShape {
    pub point1: PointShape,
    pub point2: PointShape,
    pub point3: PointShape,
    pub style: Arc<Style>,
    pub is_stroked: bool,
    pub is_filled: bool,
    pub state: ShapeState,
}

impl QuadraticBezierShape {
    /// Number of polyline samples used for hit testing.
    pub const SAMPLES: usize = 24;

    pub fn new(
        point1: PointShape,
        point2: PointShape,
        point3: PointShape,
        style: Arc<Style>,
        is_stroked: bool,
        is_filled: bool,
    ) -> Self {
        Self {
            point1,
            point2,
            point3,
            style,
            is_stroked,
            is_filled,
            state: ShapeState::default(),
        }
    }

    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    ///
    /// ```text
    /// B(t) = (1-t)^2 P1 + 2(1-t) t P2 + t^2 P3
    /// ```
    pub fn evaluate(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let b1 = u * u;
        let b2 = 2.0 * u * t;
        let b3 = t * t;
        Point2::new(
            b1 * self.point1.x + b2 * self.point2.x + b3 * self.point3.x,
            b1 * self.point1.y + b2 * self.point2.y + b3 * self.point3.y,
        )
    }

    /// Uniformly samples the curve into a polyline, endpoints included.
    pub fn points(&self) -> Vec<Point2> {
        (0..Self::SAMPLES)
            .map(|i| self.evaluate(i as f64 / (Self::SAMPLES - 1) as f64))
            .collect()
    }
}
