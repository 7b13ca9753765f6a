//! Compose and preview modal rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::{CREATE_POST, PREVIEW_POST};
use crate::state::{AppState, PreviewHitAreas};
use crate::view::constants::{MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use crate::view::post_card::{actions_line, carousel_line, header_line, wrapped_height};

/// Calculate centered rectangle for the modal popup.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Move `rect` down by `rows` (up when negative) and clip it to `bounds`.
///
/// Returns `None` once the rect has left `bounds` entirely.
pub fn shift_rect(rect: Rect, rows: i32, bounds: Rect) -> Option<Rect> {
    let top = i32::from(rect.y) + rows;
    let bottom = top + i32::from(rect.height);
    let clipped_top = top.max(i32::from(bounds.y));
    let clipped_bottom = bottom.min(i32::from(bounds.bottom()));
    if clipped_bottom <= clipped_top {
        return None;
    }
    Some(Rect::new(
        rect.x,
        clipped_top as u16,
        rect.width,
        (clipped_bottom - clipped_top) as u16,
    ))
}

/// Render the compose modal when `createPost` is open.
pub fn render_compose_modal(frame: &mut Frame, state: &AppState) {
    if !state.modals.is_active(CREATE_POST) {
        return;
    }

    let area = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, frame.area());
    frame.render_widget(Clear, area);

    let handle = state.content.author().handle.clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" New post as {handle} "));

    let mut lines: Vec<Line> = state
        .draft
        .split('\n')
        .map(|l| Line::from(l.to_string()))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.spans.push(Span::styled(
            "_",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the preview modal when `previewPost` is open.
///
/// The panel is drawn shifted by the swipe transform, converted from pixels
/// back to rows. Returns where its regions landed, or `None` when nothing
/// was drawn.
pub fn render_preview_modal(frame: &mut Frame, state: &AppState) -> Option<PreviewHitAreas> {
    if !state.modals.is_active(PREVIEW_POST) {
        return None;
    }

    let bounds = frame.area();
    let base = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, bounds);
    let offset_rows = if state.cell_height_px() > 0.0 {
        (state.swipe.transform().offset_px / state.cell_height_px()).round() as i32
    } else {
        0
    };
    let panel = shift_rect(base, offset_rows, bounds)?;

    frame.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .title_bottom(" drag up to publish, down to edit ");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Caption
            Constraint::Length(1), // Carousel
            Constraint::Length(1), // Actions
        ])
        .split(inner);

    let staged = state.content.staged_post();
    frame.render_widget(Paragraph::new(header_line(&staged, false)), rows[0]);

    let caption = state.content.caption().to_string();
    let caption_overflows = wrapped_height(&caption, rows[1].width) > usize::from(rows[1].height);
    frame.render_widget(
        Paragraph::new(caption).wrap(Wrap { trim: false }),
        rows[1],
    );

    let images = state.content.images();
    let carousel = match carousel_line(images, state.preview_image, usize::from(rows[2].width)) {
        Some(line) => {
            frame.render_widget(Paragraph::new(line), rows[2]);
            Some(rows[2])
        }
        None => {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "no images attached",
                    Style::default().fg(Color::DarkGray),
                )),
                rows[2],
            );
            None
        }
    };

    frame.render_widget(Paragraph::new(actions_line(&staged)), rows[3]);

    Some(PreviewHitAreas {
        panel,
        carousel,
        caption: Some(rows[1]),
        caption_overflows,
    })
}
