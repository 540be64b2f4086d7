//! Text tool: drags out the layout box, committed with default content.

use draftkit_core::container::Container;
use draftkit_core::shape::{BaseShape, TextShape};

use super::{Editor, ToolState};

fn staged<'a>(editor: &Editor, container: &'a mut Container) -> Option<&'a mut TextShape> {
    match editor
        .in_progress()
        .and_then(|id| container.working_layer_mut().get_mut(id))
    {
        Some(BaseShape::Text(text)) => Some(text),
        _ => None,
    }
}

pub(super) fn left(editor: &mut Editor, container: &mut Container, x: f64, y: f64) {
    match editor.state() {
        ToolState::None => {
            let text = TextShape::new(
                super::control_point(container, x, y),
                super::control_point(container, x, y),
                TextShape::DEFAULT_TEXT,
                container.current_style.clone(),
                true,
                editor.options.default_is_filled,
            );
            let id = container.working_layer_mut().add(BaseShape::Text(text));
            editor.begin(id, ToolState::One);
            container.working_layer_mut().invalidate();
        }
        ToolState::One => {
            if let Some(text) = staged(editor, container) {
                text.bottom_right.set(x, y);
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
    if let Some(text) = staged(editor, container) {
        text.bottom_right.set(x, y);
        container.working_layer_mut().invalidate();
    }
}
