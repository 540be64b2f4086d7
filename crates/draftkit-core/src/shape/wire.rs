use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::point::PointShape;
use crate::state::ShapeState;
use crate::style::Style;

/// A routing segment between two connector points. Geometrically a line;
/// kept as its own kind so hosts can style and traverse wiring separately
/// from drawn lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireShape {
    pub start: PointShape,
    pub end: PointShape,
    pub style: Arc<Style>,
    pub is_stroked: bool,
    pub state: ShapeState,
}

impl WireShape {
    pub fn new(start: PointShape, end: PointShape, style: Arc<Style>, is_stroked: bool) -> Self {
        Self {
            start,
            end,
            style,
            is_stroked,
            state: ShapeState::default(),
        }
    }
}
