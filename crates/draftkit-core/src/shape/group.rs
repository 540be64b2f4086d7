use serde::{Deserialize, Serialize};

use super::point::PointShape;
use super::BaseShape;
use crate::state::ShapeState;

/// A named collection of child shapes with designated connector points.
///
/// The group owns its connectors exclusively. They are flagged
/// [`ShapeState::CONNECTOR`] so interactive tools treat them as attached
/// to the group rather than free-standing points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupShape {
    pub name: String,
    pub shapes: Vec<BaseShape>,
    pub connectors: Vec<PointShape>,
    pub state: ShapeState,
}

impl GroupShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
            connectors: Vec::new(),
            state: ShapeState::default(),
        }
    }

    /// Builds a group from existing shapes.
    pub fn from_shapes(name: impl Into<String>, shapes: Vec<BaseShape>) -> Self {
        Self {
            name: name.into(),
            shapes,
            connectors: Vec::new(),
            state: ShapeState::default(),
        }
    }

    pub fn add_shape(&mut self, shape: BaseShape) {
        self.shapes.push(shape);
    }

    /// Adds a connector point, tagging it with the `CONNECTOR` flag.
    pub fn add_connector(&mut self, mut point: PointShape) {
        point.state.insert(ShapeState::CONNECTOR);
        self.connectors.push(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_connector_sets_flag() {
        let mut group = GroupShape::new("g1");
        group.add_connector(PointShape::new(1.0, 2.0));
        assert_eq!(group.connectors.len(), 1);
        assert!(group.connectors[0].state.contains(ShapeState::CONNECTOR));
        assert!(group.connectors[0].state.contains(ShapeState::VISIBLE));
    }
}
