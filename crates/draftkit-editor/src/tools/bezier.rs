//! Cubic Bézier tool.
//!
//! Four clicks: anchor `point1`, then fix `point2`, `point3` and
//! `point4` in turn. Which points still track the pointer between
//! clicks depends on the state: all free points in `One`, only `point3`
//! in `Two`, only `point2` in `Three`.

use draftkit_core::container::Container;
use draftkit_core::shape::{BaseShape, CubicBezierShape};

use super::{Editor, ToolState};

fn staged<'a>(editor: &Editor, container: &'a mut Container) -> Option<&'a mut CubicBezierShape> {
    match editor
        .in_progress()
        .and_then(|id| container.working_layer_mut().get_mut(id))
    {
        Some(BaseShape::CubicBezier(cubic)) => Some(cubic),
        _ => None,
    }
}

pub(super) fn left(editor: &mut Editor, container: &mut Container, x: f64, y: f64) {
    match editor.state() {
        ToolState::None => {
            let cubic = CubicBezierShape::new(
                super::control_point(container, x, y),
                super::control_point(container, x, y),
                super::control_point(container, x, y),
                super::control_point(container, x, y),
                container.current_style.clone(),
                true,
                editor.options.default_is_filled,
            );
            let id = container
                .working_layer_mut()
                .add(BaseShape::CubicBezier(cubic));
            editor.begin(id, ToolState::One);
            container.working_layer_mut().invalidate();
        }
        ToolState::One => {
            // Fixes point2 at the click; the rest keep tracking.
            if let Some(cubic) = staged(editor, container) {
                cubic.point2.set(x, y);
                cubic.point3.set(x, y);
                cubic.point4.set(x, y);
                container.working_layer_mut().invalidate();
            }
            editor.transition(ToolState::Two);
        }
        ToolState::Two => {
            // Fixes point3.
            if let Some(cubic) = staged(editor, container) {
                cubic.point3.set(x, y);
                cubic.point4.set(x, y);
                container.working_layer_mut().invalidate();
            }
            editor.transition(ToolState::Three);
        }
        ToolState::Three => {
            if let Some(cubic) = staged(editor, container) {
                cubic.point4.set(x, y);
            }
            editor.commit(container);
        }
    }
}

pub(super) fn moved(editor: &mut Editor, container: &mut Container, x: f64, y: f64) {
    let state = editor.state();
    if let Some(cubic) = staged(editor, container) {
        match state {
            ToolState::One => {
                cubic.point2.set(x, y);
                cubic.point3.set(x, y);
                cubic.point4.set(x, y);
            }
            ToolState::Two => cubic.point3.set(x, y),
            ToolState::Three => cubic.point2.set(x, y),
            ToolState::None => return,
        }
        container.working_layer_mut().invalidate();
    }
}
