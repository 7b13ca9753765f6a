//! Staged post composition.
//!
//! Holds the caption and attachments the user is composing until they are
//! published to the timeline.

use chrono::Utc;
use tracing::{debug, info};

use crate::caption::CaptionConfig;
use crate::model::Author;
use crate::render::{PostRenderModel, Timeline};

/// Compose state plus the identity posts are published under.
#[derive(Debug, Clone)]
pub struct ContentService {
    author: Author,
    caption_config: CaptionConfig,
    caption: String,
    images: Vec<String>,
}

impl ContentService {
    /// Empty compose state publishing as `author`.
    pub fn new(author: Author, caption_config: CaptionConfig) -> Self {
        Self {
            author,
            caption_config,
            caption: String::new(),
            images: Vec::new(),
        }
    }

    /// Identity posts are published under.
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Staged caption, already trimmed.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Staged image URLs.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Stage `text` as the caption, trimmed.
    pub fn set_caption(&mut self, text: &str) {
        self.caption = text.trim().to_string();
    }

    /// Stage an attachment. Only `image/*` types are accepted.
    ///
    /// Returns whether the attachment was staged.
    pub fn attach(&mut self, url: impl Into<String>, mime: &str) -> bool {
        let url = url.into();
        if !mime.starts_with("image/") {
            debug!(%url, mime, "skipping non-image attachment");
            return false;
        }
        self.images.push(url);
        true
    }

    /// There is something to preview.
    pub fn preview_enabled(&self) -> bool {
        !self.images.is_empty() || !self.caption.is_empty()
    }

    /// Build the staged post (without publishing it).
    pub fn staged_post(&self) -> PostRenderModel {
        let mut post = PostRenderModel::new(self.caption_config);
        post.set_author(self.author.full_name.clone(), self.author.handle.clone());
        if let Some(avatar) = &self.author.avatar_url {
            post.set_avatar(avatar.clone());
        }
        post.set_caption(self.caption.clone())
            .set_images(self.images.clone())
            .set_user_posted()
            .set_date(Utc::now());
        post
    }

    /// Commit the staged post to the head of `timeline` and clear staged state.
    pub fn publish(&mut self, timeline: &mut Timeline) {
        let post = self.staged_post();
        post.bind_to_timeline(timeline);
        info!(
            handle = %self.author.handle,
            images = self.images.len(),
            caption_len = self.caption.chars().count(),
            "post published"
        );
        self.reset();
    }

    /// Drop the staged caption and attachments.
    pub fn reset(&mut self) {
        self.caption.clear();
        self.images.clear();
    }
}
