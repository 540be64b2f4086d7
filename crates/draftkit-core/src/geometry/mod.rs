//! Geometry primitives shared by the shape model and the hit-testing
//! subsystem.

pub mod line;
pub mod point;
pub mod polygon;
pub mod rect;

pub use line::{clip_to_rect, distance_to_segment, nearest_on_segment};
pub use point::Point2;
pub use rect::Rect2;
