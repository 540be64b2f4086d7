use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::point::PointShape;
use crate::geometry::Rect2;
use crate::state::ShapeState;
use crate::style::Style;

/// An image placed in the rectangle spanned by two corner points. The
/// `key` names the image in the host's asset store; pixel data never
/// enters the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageShape {
    pub top_left: PointShape,
    pub bottom_right: PointShape,
    pub key: String,
    pub style: Arc<Style>,
    pub is_stroked: bool,
    pub is_filled: bool,
    pub state: ShapeState,
}

impl ImageShape {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        top_left: PointShape,
        bottom_right: PointShape,
        key: impl Into<String>,
        style: Arc<Style>,
        is_stroked: bool,
        is_filled: bool,
    ) -> Self {
        Self {
            top_left,
            bottom_right,
            key: key.into(),
            style,
            is_stroked,
            is_filled,
            state: ShapeState::default(),
        }
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
