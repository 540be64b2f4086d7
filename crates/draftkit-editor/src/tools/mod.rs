//! The interactive drawing tools.
//!
//! Pointer events arrive as `left` / `right` / `move_to` calls with raw
//! document coordinates. The editor snaps them to the grid, then the
//! active tool advances its click sequence: shapes under construction
//! are staged on the container's working layer and move to the current
//! layer when the sequence completes. The editor holds the staged
//! shape's layer id, never the shape itself.

use draftkit_core::container::Container;
use draftkit_core::shape::PointShape;
use tracing::{debug, warn};

use crate::options::EditorOptions;
use crate::snap::snap;

mod bezier;
mod ellipse;
mod line;
mod qbezier;
mod rectangle;
mod text;

/// The active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    None,
    Line,
    Rectangle,
    Ellipse,
    Bezier,
    QBezier,
    Text,
}

/// Progress through the active tool's click sequence. Two-click tools
/// only use `One`; the Bézier tools walk further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolState {
    #[default]
    None,
    One,
    Two,
    Three,
}

/// The drawing-tool state machine.
///
/// The editor does not own the document; every entry point takes the
/// [`Container`] it operates on.
pub struct Editor {
    pub tool: Tool,
    state: ToolState,
    pub options: EditorOptions,
    in_progress: Option<u64>,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            tool: Tool::None,
            state: ToolState::None,
            options,
            in_progress: None,
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    /// Working-layer id of the shape under construction, if any.
    pub fn in_progress(&self) -> Option<u64> {
        self.in_progress
    }

    /// Primary click.
    pub fn left(&mut self, container: &mut Container, x: f64, y: f64) {
        let (x, y) = self.snap_point(x, y);
        match self.tool {
            Tool::None => {}
            Tool::Line => line::left(self, container, x, y),
            Tool::Rectangle => rectangle::left(self, container, x, y),
            Tool::Ellipse => ellipse::left(self, container, x, y),
            Tool::Bezier => bezier::left(self, container, x, y),
            Tool::QBezier => qbezier::left(self, container, x, y),
            Tool::Text => text::left(self, container, x, y),
        }
    }

    /// Secondary click: cancels the shape under construction.
    pub fn right(&mut self, container: &mut Container, _x: f64, _y: f64) {
        if self.tool != Tool::None && self.state != ToolState::None {
            self.cancel(container);
        }
    }

    /// Pointer move.
    pub fn move_to(&mut self, container: &mut Container, x: f64, y: f64) {
        let (x, y) = self.snap_point(x, y);
        match self.tool {
            Tool::None => {}
            Tool::Line => line::moved(self, container, x, y),
            Tool::Rectangle => rectangle::moved(self, container, x, y),
            Tool::Ellipse => ellipse::moved(self, container, x, y),
            Tool::Bezier => bezier::moved(self, container, x, y),
            Tool::QBezier => qbezier::moved(self, container, x, y),
            Tool::Text => text::moved(self, container, x, y),
        }
    }

    fn snap_point(&self, x: f64, y: f64) -> (f64, f64) {
        if self.options.snap_to_grid {
            (snap(x, self.options.snap_x), snap(y, self.options.snap_y))
        } else {
            (x, y)
        }
    }

    fn transition(&mut self, next: ToolState) {
        debug!(tool = ?self.tool, from = ?self.state, to = ?next, "tool transition");
        self.state = next;
    }

    /// Stages the freshly added working-layer shape.
    fn begin(&mut self, id: u64, next: ToolState) {
        self.in_progress = Some(id);
        self.transition(next);
    }

    /// Finishes the click sequence: the staged shape moves from the
    /// working layer to the current layer. Every document layer is
    /// invalidated, then the working layer once more.
    fn commit(&mut self, container: &mut Container) {
        if let Some(id) = self.in_progress.take() {
            match container.working_layer_mut().remove(id) {
                Some(shape) => {
                    container.current_layer_mut().add(shape);
                }
                None => warn!("staged shape {} missing from working layer", id),
            }
        }
        container.invalidate();
        container.working_layer_mut().invalidate();
        self.transition(ToolState::None);
    }

    /// Drops the staged shape. Removing an id the working layer no
    /// longer holds is a no-op.
    fn cancel(&mut self, container: &mut Container) {
        if let Some(id) = self.in_progress.take() {
            container.working_layer_mut().remove(id);
        }
        container.working_layer_mut().invalidate();
        self.transition(ToolState::None);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

/// Control point for a tool-created shape, carrying the container's
/// point template so renderers draw the container's marker at it.
fn control_point(container: &Container, x: f64, y: f64) -> PointShape {
    match &container.point_template {
        Some(template) => PointShape::with_template(x, y, template.clone()),
        None => PointShape::new(x, y),
    }
}
