//! Line tool: anchor the start, track the end, second click commits.

use draftkit_core::container::Container;
use draftkit_core::shape::{BaseShape, LineShape};

use super::{Editor, ToolState};

fn staged<'a>(editor: &Editor, container: &'a mut Container) -> Option<&'a mut LineShape> {
    match editor
        .in_progress()
        .and_then(|id| container.working_layer_mut().get_mut(id))
    {
        Some(BaseShape::Line(line)) => Some(line),
        _ => None,
    }
}

pub(super) fn left(editor: &mut Editor, container: &mut Container, x: f64, y: f64) {
    match editor.state() {
        ToolState::None => {
            let line = LineShape::new(
                super::control_point(container, x, y),
                super::control_point(container, x, y),
                container.current_style.clone(),
                true,
            );
            let id = container.working_layer_mut().add(BaseShape::Line(line));
            editor.begin(id, ToolState::One);
            container.working_layer_mut().invalidate();
        }
        ToolState::One => {
            if let Some(line) = staged(editor, container) {
                line.end.set(x, y);
            }
            editor.commit(container);
        }
        _ => {}
    }
}

pub(super) fn moved(editor: &mut Editor, container: &mut Container, x: f64, y: f64) {
    if editor.state() != ToolState::One {
        return;
    }
    if let Some(line) = staged(editor, container) {
        line.end.set(x, y);
        container.working_layer_mut().invalidate();
    }
}
