use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::point::PointShape;
use crate::geometry::Point2;
use crate::state::ShapeState;
use crate::style::Style;

/// Fill rule applied when a path is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillRule {
    #[default]
    Nonzero,
    EvenOdd,
}

/// Sweep direction of an arc segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SweepDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// Radii of an arc segment's ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSegment {
    pub point: PointShape,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcSegment {
    pub point: PointShape,
    pub size: PathSize,
    pub rotation_angle: f64,
    pub is_large_arc: bool,
    pub sweep: SweepDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubicSegment {
    pub point1: PointShape,
    pub point2: PointShape,
    pub point3: PointShape,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadraticSegment {
    pub point1: PointShape,
    pub point2: PointShape,
}

/// One segment of a path figure. The set of kinds is closed; adding a
/// kind means extending every match over this enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PathSegment {
    Line(LineSegment),
    Arc(ArcSegment),
    Cubic(CubicSegment),
    Quadratic(QuadraticSegment),
}

impl PathSegment {
    /// The segment's defining points, in declaration order.
    pub fn points(&self) -> SmallVec<[&PointShape; 3]> {
        match self {
            PathSegment::Line(s) => smallvec![&s.point],
            PathSegment::Arc(s) => smallvec![&s.point],
            PathSegment::Cubic(s) => smallvec![&s.point1, &s.point2, &s.point3],
            PathSegment::Quadratic(s) => smallvec![&s.point1, &s.point2],
        }
    }
}

/// A connected run of segments starting at `start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFigure {
    pub start: PointShape,
    pub segments: Vec<PathSegment>,
    pub is_closed: bool,
}

impl PathFigure {
    pub fn new(start: PointShape, is_closed: bool) -> Self {
        Self {
            start,
            segments: Vec::new(),
            is_closed,
        }
    }

    pub fn line_to(&mut self, point: PointShape) {
        self.segments.push(PathSegment::Line(LineSegment { point }));
    }

    pub fn cubic_to(&mut self, point1: PointShape, point2: PointShape, point3: PointShape) {
        self.segments.push(PathSegment::Cubic(CubicSegment {
            point1,
            point2,
            point3,
        }));
    }

    pub fn quadratic_to(&mut self, point1: PointShape, point2: PointShape) {
        self.segments
            .push(PathSegment::Quadratic(QuadraticSegment { point1, point2 }));
    }

    pub fn arc_to(
        &mut self,
        point: PointShape,
        size: PathSize,
        rotation_angle: f64,
        is_large_arc: bool,
        sweep: SweepDirection,
    ) {
        self.segments.push(PathSegment::Arc(ArcSegment {
            point,
            size,
            rotation_angle,
            is_large_arc,
            sweep,
        }));
    }
}

/// A multi-figure path.
///
/// Hit testing treats the path as the polygon over its defining points:
/// each figure contributes its start followed by every segment's points
/// in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathShape {
    pub figures: Vec<PathFigure>,
    pub fill_rule: FillRule,
    pub style: Arc<Style>,
    pub is_stroked: bool,
    pub is_filled: bool,
    pub state: ShapeState,
}

impl PathShape {
    pub fn new(style: Arc<Style>, fill_rule: FillRule, is_stroked: bool, is_filled: bool) -> Self {
        Self {
            figures: Vec::new(),
            fill_rule,
            style,
            is_stroked,
            is_filled,
            state: ShapeState::default(),
        }
    }

    /// Every control point of the path, in declaration order across all
    /// figures.
    pub fn control_points(&self) -> Vec<&PointShape> {
        let mut out = Vec::new();
        for figure in &self.figures {
            out.push(&figure.start);
            for segment in &figure.segments {
                out.extend(segment.points());
            }
        }
        out
    }

    /// The path's defining points as raw coordinates.
    pub fn points(&self) -> Vec<Point2> {
        self.control_points()
            .into_iter()
            .map(|p| p.position())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_aggregate_across_figures_and_kinds() {
        let mut path = PathShape::new(Arc::new(Style::default()), FillRule::Nonzero, true, false);

        let mut first = PathFigure::new(PointShape::new(0.0, 0.0), true);
        first.line_to(PointShape::new(10.0, 0.0));
        first.cubic_to(
            PointShape::new(12.0, 2.0),
            PointShape::new(12.0, 8.0),
            PointShape::new(10.0, 10.0),
        );
        path.figures.push(first);

        let mut second = PathFigure::new(PointShape::new(20.0, 20.0), false);
        second.quadratic_to(PointShape::new(25.0, 25.0), PointShape::new(30.0, 20.0));
        second.arc_to(
            PointShape::new(35.0, 20.0),
            PathSize {
                width: 2.5,
                height: 2.5,
            },
            0.0,
            false,
            SweepDirection::Clockwise,
        );
        path.figures.push(second);

        // 1 start + 1 line + 3 cubic, then 1 start + 2 quadratic + 1 arc.
        let points = path.points();
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], Point2::new(0.0, 0.0));
        assert_eq!(points[5], Point2::new(20.0, 20.0));
        assert_eq!(points[8], Point2::new(35.0, 20.0));
    }
}
