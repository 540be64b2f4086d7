use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::point::PointShape;
use super::BaseShape;
use crate::state::ShapeState;

/// A reusable block definition. Child shapes are stored in block-local
/// coordinates; inserts place instances of the block in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    pub shapes: Vec<BaseShape>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    pub fn from_shapes(name: impl Into<String>, shapes: Vec<BaseShape>) -> Self {
        Self {
            name: name.into(),
            shapes,
        }
    }
}

/// A placed instance of a shared [`Block`].
///
/// The block definition is shared between every insert referencing it;
/// the insert contributes the placement origin and its own connector
/// points (document coordinates).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertShape {
    pub origin: PointShape,
    pub block: Arc<Block>,
    pub connectors: Vec<PointShape>,
    pub state: ShapeState,
}

impl InsertShape {
    pub fn new(origin: PointShape, block: Arc<Block>) -> Self {
        Self {
            origin,
            block,
            connectors: Vec::new(),
            state: ShapeState::default(),
        }
    }

    /// Adds a connector point, tagging it with the `CONNECTOR` flag.
    pub fn add_connector(&mut self, mut point: PointShape) {
        point.state.insert(ShapeState::CONNECTOR);
        self.connectors.push(point);
    }
}
