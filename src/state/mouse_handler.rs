//! Mouse event handler.
//!
//! Maps terminal mouse events onto the timeline scroll and the preview
//! swipe controller.

use std::time::Instant;

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::gesture::{PointerEvent, PointerRegion, Settle};
use crate::state::timeline_handler::scroll_timeline;
use crate::state::AppState;

/// Rows scrolled per wheel notch.
pub const WHEEL_SCROLL_ROWS: i32 = 3;

/// Where the preview panel was last drawn.
///
/// The view records this each frame so presses can be classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewHitAreas {
    /// Panel area.
    pub panel: Rect,
    /// Carousel row, when images are attached.
    pub carousel: Option<Rect>,
    /// Caption box.
    pub caption: Option<Rect>,
    /// Caption text is taller than its box, so the box scrolls on its own.
    pub caption_overflows: bool,
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Classify a preview cell into the region a gesture would start from.
///
/// # Behavior
/// - The carousel row is always `Carousel`
/// - The caption box is `ScrollableCaption` only when its text overflows
/// - Everything else is `Surface`
pub fn classify_region(column: u16, row: u16, areas: &PreviewHitAreas) -> PointerRegion {
    if areas.carousel.is_some_and(|rect| contains(rect, column, row)) {
        return PointerRegion::Carousel;
    }
    if areas.caption_overflows && areas.caption.is_some_and(|rect| contains(rect, column, row)) {
        return PointerRegion::ScrollableCaption;
    }
    PointerRegion::Surface
}

/// Handle a mouse event while the preview modal is open.
///
/// Horizontal wheel over the carousel steps the image and arms the drag
/// suppression window. Left-button press, drag and release drive the
/// swipe controller. Returns the settle decision when a gesture ends.
pub fn handle_preview_mouse(
    state: &mut AppState,
    mouse: MouseEvent,
    areas: &PreviewHitAreas,
    now: Instant,
) -> Option<Settle> {
    let region = classify_region(mouse.column, mouse.row, areas);

    match mouse.kind {
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight
            if region == PointerRegion::Carousel =>
        {
            let count = state.content.images().len();
            state.preview_image = match mouse.kind {
                MouseEventKind::ScrollLeft => state.preview_image.saturating_sub(1),
                _ => (state.preview_image + 1).min(count.saturating_sub(1)),
            };
            state.swipe.carousel_scrolled(now);
            None
        }
        _ => {
            let event = PointerEvent::from_mouse(mouse, state.cell_height_px(), region)?;
            state.swipe.handle(event, now)
        }
    }
}

/// Handle a mouse event over the timeline. Only the vertical wheel scrolls.
pub fn handle_timeline_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => scroll_timeline(state, WHEEL_SCROLL_ROWS),
        MouseEventKind::ScrollUp => scroll_timeline(state, -WHEEL_SCROLL_ROWS),
        _ => {}
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
