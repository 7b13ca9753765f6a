//! Keyboard handler for the compose and preview modals.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::services::{CREATE_POST, PREVIEW_POST};
use crate::state::AppState;

/// Handle keyboard input while a modal is open.
///
/// Returns `true` if the key was consumed by the modal, `false` otherwise.
///
/// # Key Bindings
/// - Esc: close every modal
/// - In compose: characters edit the draft, Enter inserts a newline,
///   Backspace deletes, Tab opens the preview when there is content
/// - In preview: Left/Right step through attached images
///
/// Returns false if no modal is open.
pub fn handle_modal_key(state: &mut AppState, key: KeyEvent) -> bool {
    if !state.modals.container_active() {
        return false;
    }

    if key.code == KeyCode::Esc {
        state.close_modals();
        return true;
    }

    if state.modals.is_active(CREATE_POST) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.edit_draft(|draft| draft.push(c));
            }
            KeyCode::Enter => state.edit_draft(|draft| draft.push('\n')),
            KeyCode::Backspace => state.edit_draft(|draft| {
                draft.pop();
            }),
            KeyCode::Tab => {
                state.open_preview();
            }
            _ => {}
        }
    } else if state.modals.is_active(PREVIEW_POST) {
        let count = state.content.images().len();
        match key.code {
            KeyCode::Left => state.preview_image = state.preview_image.saturating_sub(1),
            KeyCode::Right if count > 0 => {
                state.preview_image = (state.preview_image + 1).min(count - 1);
            }
            _ => {}
        }
    }

    // Modals swallow every key so the timeline underneath stays put.
    true
}
