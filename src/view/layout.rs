//! Screen layout rendering.
//!
//! Header, timeline and status bar, with the modals drawn on top.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::{CREATE_POST, PREVIEW_POST};
use crate::state::{AppState, PreviewHitAreas};
use crate::view::compose::{render_compose_modal, render_preview_modal};
use crate::view::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::feed::render_feed;

/// Render the whole screen.
///
/// Returns the preview hit areas when the preview modal was drawn.
pub fn render_layout(frame: &mut Frame, state: &AppState) -> Option<PreviewHitAreas> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state);
    render_feed(frame, chunks[1], state);
    render_status_bar(frame, chunks[2], state);

    render_compose_modal(frame, state);
    render_preview_modal(frame, state)
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let count = state.timeline.len();
    let noun = if count == 1 { "post" } else { "posts" };
    let line = Line::from(vec![
        Span::styled(
            "feedswipe",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" | {count} {noun}")),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Keyboard hints for whatever currently has input.
pub fn status_hint(state: &AppState) -> &'static str {
    if state.modals.is_active(CREATE_POST) {
        "type a caption | Tab: preview | Esc: cancel"
    } else if state.modals.is_active(PREVIEW_POST) {
        "drag up: publish | drag down: edit | ←/→: images | Esc: cancel"
    } else {
        "j/k: scroll | J/K: focus | l: like | Enter: caption | n: new post | q: quit"
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph =
        Paragraph::new(status_hint(state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
