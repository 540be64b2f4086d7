use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::point::PointShape;
use crate::geometry::Point2;
use crate::state::ShapeState;
use crate::style::Style;

/// A cubic Bézier curve: endpoints `point1`/`point4`, control points
/// `point2`/`point3`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubicBezierShape {
    pub point1: PointShape,
    pub point2: PointShape,
    pub point3: PointShape,
    pub point4: PointShape,
    pub style: Arc<Style>,
    pub is_stroked: bool,
    pub is_filled: bool,
    pub state: ShapeState,
}

impl CubicBezierShape {
    /// Number of polyline samples used for hit testing.
    pub const SAMPLES: usize = 32;

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

    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    ///
    /// ```text
    /// B(t) = (1-t)^3 P1 + 3(1-t)^2 t P2 + 3(1-t) t^2 P3 + t^3 P4
    /// ```
    pub fn evaluate(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let b1 = u * u * u;
        let b2 = 3.0 * u * u * t;
        let b3 = 3.0 * u * t * t;
        let b4 = t * t * t;
        Point2::new(
            b1 * self.point1.x + b2 * self.point2.x + b3 * self.point3.x + b4 * self.point4.x,
            b1 * self.point1.y + b2 * self.point2.y + b3 * self.point3.y + b4 * self.point4.y,
        )
    }

    /// Uniformly samples the curve into a polyline, endpoints included.
    pub fn points(&self) -> Vec<Point2> {
        (0..Self::SAMPLES)
            .map(|i| self.evaluate(i as f64 / (Self::SAMPLES - 1) as f64))
            .collect()
    }
}
