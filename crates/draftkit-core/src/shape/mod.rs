//! The shape model: one module per shape kind plus the closed
//! [`BaseShape`] sum type the rest of the system dispatches on.

use serde::{Deserialize, Serialize};

mod arc;
mod cubic;
mod ellipse;
mod group;
mod image;
mod insert;
mod line;
mod path;
mod point;
mod quadratic;
mod rectangle;
mod text;
mod wire;

pub use arc::ArcShape;
pub use cubic::CubicBezierShape;
pub use ellipse::EllipseShape;
pub use group::GroupShape;
pub use image::ImageShape;
pub use insert::{Block, InsertShape};
pub use line::LineShape;
pub use path::{
    ArcSegment, CubicSegment, FillRule, LineSegment, PathFigure, PathSegment, PathShape, PathSize,
    QuadraticSegment, SweepDirection,
};
pub use point::PointShape;
pub use quadratic::QuadraticBezierShape;
pub use rectangle::RectangleShape;
pub use text::TextShape;
pub use wire::WireShape;

use crate::state::ShapeState;

/// Discriminant for [`BaseShape`] variants. Used as the dispatch key of
/// the bounds-handler registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    Line,
    Rectangle,
    Ellipse,
    Arc,
    CubicBezier,
    QuadraticBezier,
    Text,
    Image,
    Path,
    Group,
    Insert,
    Wire,
}

/// Any shape in a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BaseShape {
    Point(PointShape),
    Line(LineShape),
    Rectangle(RectangleShape),
    Ellipse(EllipseShape),
    Arc(ArcShape),
    CubicBezier(CubicBezierShape),
    QuadraticBezier(QuadraticBezierShape),
    Text(TextShape),
    Image(ImageShape),
    Path(PathShape),
    Group(GroupShape),
    Insert(InsertShape),
    Wire(WireShape),
}

impl BaseShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            BaseShape::Point(_) => ShapeKind::Point,
            BaseShape::Line(_) => ShapeKind::Line,
            BaseShape::Rectangle(_) => ShapeKind::Rectangle,
            BaseShape::Ellipse(_) => ShapeKind::Ellipse,
            BaseShape::Arc(_) => ShapeKind::Arc,
            BaseShape::CubicBezier(_) => ShapeKind::CubicBezier,
            BaseShape::QuadraticBezier(_) => ShapeKind::QuadraticBezier,
            BaseShape::Text(_) => ShapeKind::Text,
            BaseShape::Image(_) => ShapeKind::Image,
            BaseShape::Path(_) => ShapeKind::Path,
            BaseShape::Group(_) => ShapeKind::Group,
            BaseShape::Insert(_) => ShapeKind::Insert,
            BaseShape::Wire(_) => ShapeKind::Wire,
        }
    }

    pub fn state(&self) -> ShapeState {
        match self {
            BaseShape::Point(s) => s.state,
            BaseShape::Line(s) => s.state,
            BaseShape::Rectangle(s) => s.state,
            BaseShape::Ellipse(s) => s.state,
            BaseShape::Arc(s) => s.state,
            BaseShape::CubicBezier(s) => s.state,
            BaseShape::QuadraticBezier(s) => s.state,
            BaseShape::Text(s) => s.state,
            BaseShape::Image(s) => s.state,
            BaseShape::Path(s) => s.state,
            BaseShape::Group(s) => s.state,
            BaseShape::Insert(s) => s.state,
            BaseShape::Wire(s) => s.state,
        }
    }

    pub fn state_mut(&mut self) -> &mut ShapeState {
        match self {
            BaseShape::Point(s) => &mut s.state,
            BaseShape::Line(s) => &mut s.state,
            BaseShape::Rectangle(s) => &mut s.state,
            BaseShape::Ellipse(s) => &mut s.state,
            BaseShape::Arc(s) => &mut s.state,
            BaseShape::CubicBezier(s) => &mut s.state,
            BaseShape::QuadraticBezier(s) => &mut s.state,
            BaseShape::Text(s) => &mut s.state,
            BaseShape::Image(s) => &mut s.state,
            BaseShape::Path(s) => &mut s.state,
            BaseShape::Group(s) => &mut s.state,
            BaseShape::Insert(s) => &mut s.state,
            BaseShape::Wire(s) => &mut s.state,
        }
    }
}
