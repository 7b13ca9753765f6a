//! Application state.
//!
//! Owns the timeline, the compose services and the preview's swipe
//! controller. The view reads it and the handlers mutate it.

use std::time::Instant;

use crate::caption::CaptionConfig;
use crate::config::ResolvedConfig;
use crate::gesture::{SwipeController, SwipeOutcome};
use crate::render::{PostRenderModel, Timeline};
use crate::services::{
    ContentService, FeedEffects, ModalRegistry, ModalService, CREATE_POST, PREVIEW_POST,
};

/// Fallback viewport when the terminal size is unknown.
const DEFAULT_VIEWPORT_ROWS: u16 = 24;

/// Everything the TUI shows, independent of the terminal.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Posts, newest first.
    pub timeline: Timeline,
    /// Post being composed.
    pub content: ContentService,
    /// Open modal.
    pub modals: ModalRegistry,
    /// Swipe state of the preview panel.
    pub swipe: SwipeController,
    /// Index of the focused post in the timeline.
    pub focused: usize,
    /// Timeline scroll, in rows.
    pub scroll_offset: u16,
    /// Raw compose text. The content service holds the trimmed caption.
    pub draft: String,
    /// Image shown in the preview carousel.
    pub preview_image: usize,
    caption_config: CaptionConfig,
    cell_height_px: f64,
}

impl AppState {
    /// State over `timeline` with nothing open.
    pub fn new(config: &ResolvedConfig, timeline: Timeline) -> Self {
        let cell_height_px = config.cell_height_px;
        Self {
            timeline,
            content: ContentService::new(config.author.clone(), config.caption()),
            modals: ModalRegistry::default(),
            swipe: SwipeController::new(
                config.gesture(),
                f64::from(DEFAULT_VIEWPORT_ROWS) * cell_height_px,
            ),
            focused: 0,
            scroll_offset: 0,
            draft: String::new(),
            preview_image: 0,
            caption_config: config.caption(),
            cell_height_px,
        }
    }

    /// Caption limits for timeline posts.
    pub fn caption_config(&self) -> CaptionConfig {
        self.caption_config
    }

    /// Pixel height of one row.
    pub fn cell_height_px(&self) -> f64 {
        self.cell_height_px
    }

    /// Resize the gesture viewport to `rows` terminal rows.
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.swipe
            .set_viewport_height(f64::from(rows) * self.cell_height_px);
    }

    /// Post under focus.
    pub fn focused_post(&self) -> Option<&PostRenderModel> {
        self.timeline.get(self.focused)
    }

    /// Mutable post under focus.
    pub fn focused_post_mut(&mut self) -> Option<&mut PostRenderModel> {
        self.timeline.get_mut(self.focused)
    }

    /// Edit the compose text and restage the caption.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.draft);
        self.content.set_caption(&self.draft);
    }

    /// Open the compose modal.
    pub fn open_compose(&mut self) {
        self.modals.activate(CREATE_POST);
    }

    /// Open the preview when there is something to preview.
    ///
    /// Returns whether the preview opened.
    pub fn open_preview(&mut self) -> bool {
        if !self.content.preview_enabled() {
            return false;
        }
        self.preview_image = 0;
        self.modals.activate(PREVIEW_POST);
        true
    }

    /// Close every modal. A drag on the preview is abandoned with it.
    pub fn close_modals(&mut self) {
        self.modals.close();
        self.swipe.cancel_drag();
    }

    /// A swipe completion is waiting on its delay.
    pub fn settle_pending(&self) -> bool {
        self.swipe.next_deadline().is_some()
    }

    /// Fire every swipe completion due at `now`.
    ///
    /// A publish also resets compose state and brings the new post into focus.
    /// A drag still in progress is abandoned if its preview was closed.
    pub fn poll_settles(&mut self, now: Instant) -> Vec<SwipeOutcome> {
        let mut effects = FeedEffects {
            modals: &mut self.modals,
            content: &mut self.content,
            timeline: &mut self.timeline,
        };
        let fired = self.swipe.poll(now, &mut effects);

        if !fired.is_empty() && !self.modals.is_active(PREVIEW_POST) {
            self.swipe.cancel_drag();
        }

        if fired.contains(&SwipeOutcome::CommitPublish) {
            self.draft.clear();
            self.preview_image = 0;
            self.focused = 0;
            self.scroll_offset = 0;
        }
        fired
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
