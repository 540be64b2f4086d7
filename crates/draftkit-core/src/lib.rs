//! # DraftKit Core
//!
//! Core model for the DraftKit 2D drawing editor: geometry primitives,
//! the shape graph, styles, state flags, layers and the drawing
//! container. Rendering, persistence formats and interactive tooling
//! live in other crates and consume this model through the `BaseShape`
//! sum type and the layer/container API.

pub mod container;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod shape;
pub mod state;
pub mod style;

pub use container::Container;
pub use error::ColorParseError;
pub use geometry::{Point2, Rect2};
pub use layer::Layer;
pub use shape::{
    ArcShape, BaseShape, Block, CubicBezierShape, EllipseShape, FillRule, GroupShape, ImageShape,
    InsertShape, LineShape, PathFigure, PathSegment, PathShape, PointShape, QuadraticBezierShape,
    RectangleShape, ShapeKind, TextShape, WireShape,
};
pub use state::ShapeState;
pub use style::{Color, Style, TextStyle};
