//! Timeline pane rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::AppState;
use crate::view::post_card::post_lines;

/// Render every post top to bottom, separated by a blank line, scrolled by
/// `state.scroll_offset`.
pub fn render_feed(frame: &mut Frame, area: Rect, state: &AppState) {
    let inner_width = area.width.saturating_sub(2);
    let mut lines: Vec<Line> = Vec::new();

    for (index, post) in state.timeline.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(post_lines(post, inner_width, index == state.focused));
    }

    if lines.is_empty() {
        lines.push(Line::styled(
            "No posts yet. Press n to write one.",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default().borders(Borders::ALL).title(" Timeline ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll_offset, 0));
    frame.render_widget(paragraph, area);
}
