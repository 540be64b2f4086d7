//! Per-shape state flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Behaviour flags carried by every shape.
    ///
    /// - `VISIBLE` / `PRINTABLE`: rendering and export gates, both set by
    ///   default.
    /// - `LOCKED`: the shape ignores interactive edits.
    /// - `CONNECTOR`: the point belongs to a group or insert and follows
    ///   its owner instead of moving independently.
    /// - `SIZE`: the shape's hit target keeps a constant on-screen size,
    ///   so hit geometry is rescaled by the view zoom factor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    #[repr(transparent)]
    pub struct ShapeState: u8 {
        const VISIBLE = 0b0000_0001;
        const PRINTABLE = 0b0000_0010;
        const LOCKED = 0b0000_0100;
        const CONNECTOR = 0b0000_1000;
        const SIZE = 0b0001_0000;
    }
}

impl Default for ShapeState {
    fn default() -> Self {
        ShapeState::VISIBLE | ShapeState::PRINTABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_visible_and_printable() {
        let state = ShapeState::default();
        assert!(state.contains(ShapeState::VISIBLE));
        assert!(state.contains(ShapeState::PRINTABLE));
        assert!(!state.contains(ShapeState::SIZE));
    }

    #[test]
    fn test_connector_flag_composes() {
        let mut state = ShapeState::default();
        state.insert(ShapeState::CONNECTOR);
        assert!(state.contains(ShapeState::VISIBLE));
        assert!(state.contains(ShapeState::CONNECTOR));
        state.remove(ShapeState::CONNECTOR);
        assert_eq!(state, ShapeState::default());
    }
}
