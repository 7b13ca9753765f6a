//! Timeline keyboard action handler.

use crate::model::KeyAction;
use crate::state::AppState;

/// Apply a timeline key action.
///
/// Focus clamps to the timeline bounds (does NOT wrap). `Quit` is left to
/// the caller.
pub fn handle_timeline_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::ScrollDown => state.scroll_offset = state.scroll_offset.saturating_add(1),
        KeyAction::ScrollUp => state.scroll_offset = state.scroll_offset.saturating_sub(1),
        KeyAction::ScrollToTop => {
            state.scroll_offset = 0;
            state.focused = 0;
        }
        KeyAction::NextPost => {
            let last = state.timeline.len().saturating_sub(1);
            state.focused = (state.focused + 1).min(last);
        }
        KeyAction::PrevPost => state.focused = state.focused.saturating_sub(1),
        KeyAction::ToggleLike => {
            if let Some(post) = state.focused_post_mut() {
                post.toggle_like();
            }
        }
        KeyAction::ToggleCaption => {
            if let Some(post) = state.focused_post_mut() {
                post.toggle_caption();
            }
        }
        KeyAction::Compose => state.open_compose(),
        KeyAction::Quit => {}
    }
}

/// Scroll the timeline by a signed number of rows.
pub fn scroll_timeline(state: &mut AppState, rows: i32) {
    let offset = i32::from(state.scroll_offset) + rows;
    state.scroll_offset = offset.clamp(0, i32::from(u16::MAX)) as u16;
}
