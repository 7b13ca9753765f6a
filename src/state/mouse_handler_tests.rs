//! Tests for mouse event handling.

use super::*;
use crate::caption::CaptionConfig;
use crate::config::ResolvedConfig;
use crate::gesture::{SwipeOutcome, SwipeState};
use crate::render::Timeline;
use crossterm::event::{KeyModifiers, MouseButton};
use std::time::Duration;

// ===== Test Helpers =====

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn areas() -> PreviewHitAreas {
    PreviewHitAreas {
        panel: Rect::new(10, 2, 60, 30),
        carousel: Some(Rect::new(11, 20, 58, 1)),
        caption: Some(Rect::new(11, 6, 58, 4)),
        caption_overflows: true,
    }
}

fn preview_state() -> AppState {
    let mut state = AppState::new(
        &ResolvedConfig::default(),
        Timeline::seeded(CaptionConfig::default()),
    );
    // 50 rows of 16px: an 800px viewport.
    state.set_viewport_rows(50);
    state.edit_draft(|d| d.push_str("preview me"));
    state.content.attach("a.png", "image/png");
    state.content.attach("b.png", "image/png");
    assert!(state.open_preview());
    state
}

// ===== classify_region =====

#[test]
fn classify_carousel_row() {
    assert_eq!(classify_region(30, 20, &areas()), PointerRegion::Carousel);
}

#[test]
fn classify_overflowing_caption() {
    assert_eq!(
        classify_region(30, 7, &areas()),
        PointerRegion::ScrollableCaption
    );
}

#[test]
fn classify_caption_that_fits_is_surface() {
    let areas = PreviewHitAreas {
        caption_overflows: false,
        ..areas()
    };
    assert_eq!(classify_region(30, 7, &areas), PointerRegion::Surface);
}

#[test]
fn classify_elsewhere_is_surface() {
    assert_eq!(classify_region(30, 3, &areas()), PointerRegion::Surface);
    assert_eq!(classify_region(0, 0, &areas()), PointerRegion::Surface);
}

// ===== handle_preview_mouse =====

#[test]
fn left_drag_release_commits_publish() {
    let mut state = preview_state();
    let t0 = Instant::now();
    let a = areas();

    // Rows 25 -> 25 -> 22: deltas 0 and -48px, momentum -24.
    handle_preview_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 30, 25), &a, t0);
    assert_eq!(state.swipe.state(), SwipeState::Dragging);
    handle_preview_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 30, 25), &a, t0);
    handle_preview_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 30, 22), &a, t0);
    let settle = handle_preview_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 30, 22), &a, t0)
        .expect("release settles");

    assert_eq!(settle.outcome, SwipeOutcome::CommitPublish);
    let fired = state.poll_settles(t0 + Duration::from_millis(320));
    assert_eq!(fired, vec![SwipeOutcome::CommitPublish]);
    assert_eq!(state.timeline.get(0).unwrap().post().caption, "preview me");
}

#[test]
fn press_on_carousel_does_not_start_drag() {
    let mut state = preview_state();
    handle_preview_mouse(
        &mut state,
        mouse(MouseEventKind::Down(MouseButton::Left), 30, 20),
        &areas(),
        Instant::now(),
    );
    assert_eq!(state.swipe.state(), SwipeState::Idle);
}

#[test]
fn press_on_overflowing_caption_does_not_start_drag() {
    let mut state = preview_state();
    handle_preview_mouse(
        &mut state,
        mouse(MouseEventKind::Down(MouseButton::Left), 30, 7),
        &areas(),
        Instant::now(),
    );
    assert_eq!(state.swipe.state(), SwipeState::Idle);
}

#[test]
fn right_button_is_ignored() {
    let mut state = preview_state();
    let settle = handle_preview_mouse(
        &mut state,
        mouse(MouseEventKind::Down(MouseButton::Right), 30, 25),
        &areas(),
        Instant::now(),
    );
    assert!(settle.is_none());
    assert_eq!(state.swipe.state(), SwipeState::Idle);
}

#[test]
fn horizontal_wheel_on_carousel_steps_image_and_suppresses_drag() {
    let mut state = preview_state();
    let t0 = Instant::now();
    let a = areas();

    handle_preview_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 30, 25), &a, t0);
    handle_preview_mouse(&mut state, mouse(MouseEventKind::ScrollRight, 30, 20), &a, t0);
    assert_eq!(state.preview_image, 1);

    handle_preview_mouse(
        &mut state,
        mouse(MouseEventKind::Drag(MouseButton::Left), 30, 28),
        &a,
        t0 + Duration::from_millis(50),
    );
    assert!(state.swipe.buffer().is_empty(), "move inside suppression window is ignored");

    handle_preview_mouse(
        &mut state,
        mouse(MouseEventKind::Drag(MouseButton::Left), 30, 28),
        &a,
        t0 + Duration::from_millis(250),
    );
    assert_eq!(state.swipe.buffer().len(), 1);
}

#[test]
fn horizontal_wheel_clamps_to_image_count() {
    let mut state = preview_state();
    let a = areas();
    let now = Instant::now();
    for _ in 0..5 {
        handle_preview_mouse(&mut state, mouse(MouseEventKind::ScrollRight, 30, 20), &a, now);
    }
    assert_eq!(state.preview_image, 1);
    for _ in 0..5 {
        handle_preview_mouse(&mut state, mouse(MouseEventKind::ScrollLeft, 30, 20), &a, now);
    }
    assert_eq!(state.preview_image, 0);
}

// ===== handle_timeline_mouse =====

#[test]
fn wheel_scrolls_timeline() {
    let mut state = preview_state();
    handle_timeline_mouse(&mut state, mouse(MouseEventKind::ScrollDown, 0, 0));
    assert_eq!(state.scroll_offset, 3);
    handle_timeline_mouse(&mut state, mouse(MouseEventKind::ScrollUp, 0, 0));
    handle_timeline_mouse(&mut state, mouse(MouseEventKind::ScrollUp, 0, 0));
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn timeline_ignores_clicks() {
    let mut state = preview_state();
    handle_timeline_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 5, 5));
    assert_eq!(state.scroll_offset, 0);
}
