//! Quadratic Bézier tool.
//!
//! Three clicks: anchor `point1`, fix `point2`, then `point3`. Between
//! clicks the free points track the pointer: both in `One`, only
//! `point2` in `Two`.

use draftkit_core::container::Container;
use draftkit_core::shape::{BaseShape, QuadraticBezierShape};

use super::{Editor, ToolState};

fn staged<'a>(
    editor: &Editor,
    container: &'a mut Container,
) -> Option<&'a mut QuadraticBezierShape> {
    match editor
        .in_progress()
        .and_then(|id| container.working_layer_mut().get_mut(id))
    {
        Some(BaseShape::QuadraticBezier(quadratic)) => Some(quadratic),
        _ => None,
    }
}

pub(super) fn left(editor: &mut Editor, container: &mut Container, x: f64, y: f64) {
    match editor.state() {
        ToolState::None => {
            let quadratic = QuadraticBezierShape::new(
                super::control_point(container, x, y),
                super::control_point(container, x, y),
                super::control_point(container, x, y),
                container.current_style.clone(),
                true,
                editor.options.default_is_filled,
            );
            let id = container
                .working_layer_mut()
                .add(BaseShape::QuadraticBezier(quadratic));
            editor.begin(id, ToolState::One);
            container.working_layer_mut().invalidate();
        }
        ToolState::One => {
            // Fixes point2 at the click; point3 keeps tracking.
            if let Some(quadratic) = staged(editor, container) {
                quadratic.point2.set(x, y);
                quadratic.point3.set(x, y);
                container.working_layer_mut().invalidate();
            }
            editor.transition(ToolState::Two);
        }
        ToolState::Two => {
            if let Some(quadratic) = staged(editor, container) {
                quadratic.point3.set(x, y);
            }
            editor.commit(container);
        }
        _ => {}
    }
}

pub(super) fn moved(editor: &mut Editor, container: &mut Container, x: f64, y: f64) {
    let state = editor.state();
    if let Some(quadratic) = staged(editor, container) {
        match state {
            ToolState::One => {
                quadratic.point2.set(x, y);
                quadratic.point3.set(x, y);
            }
            ToolState::Two => quadratic.point2.set(x, y),
            _ => return,
        }
        container.working_layer_mut().invalidate();
    }
}
