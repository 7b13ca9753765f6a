//! Settle side effects wired to the modal and content services.

use crate::gesture::SettleEffects;
use crate::render::Timeline;
use crate::services::modal::CREATE_POST;
use crate::services::{ContentService, ModalService};

/// Applies swipe outcomes to the feed.
///
/// Built on demand around borrowed services. It lives only for one
/// `SwipeController::poll` call.
pub struct FeedEffects<'a, M: ModalService + ?Sized> {
    /// Modal state.
    pub modals: &'a mut M,
    /// Staged post.
    pub content: &'a mut ContentService,
    /// Timeline published posts go to.
    pub timeline: &'a mut Timeline,
}

impl<M: ModalService + ?Sized> SettleEffects for FeedEffects<'_, M> {
    fn advance_to_compose(&mut self) {
        self.modals.activate(CREATE_POST);
    }

    fn commit_publish(&mut self) {
        self.content.publish(self.timeline);
        self.modals.close();
    }
}
