//! The timeline container.
//!
//! Posts are kept most-recent-first: binding a post inserts it at the head.

use std::path::Path;

use tracing::info;

use crate::caption::CaptionConfig;
use crate::markup::MarkupNode;
use crate::model::{ReactionsUpdate, TimelineError};
use crate::render::post_model::{PostRenderModel, POST_TAG};

/// Ordered collection of mounted posts.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    posts: Vec<PostRenderModel>,
}

impl Timeline {
    /// Empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeline holding only the welcome post shown when no document is loaded.
    pub fn seeded(caption_config: CaptionConfig) -> Self {
        let mut post = PostRenderModel::new(caption_config);
        post.set_author("Rida F'kih", "@ridafkih")
            .set_caption("Say no to drugs!")
            .set_reactions(ReactionsUpdate::none().likes(12).comments(18));

        let mut timeline = Self::new();
        timeline.prepend(post);
        timeline
    }

    /// Mount `post` and insert it at the head.
    pub fn prepend(&mut self, mut post: PostRenderModel) -> &mut PostRenderModel {
        post.mount();
        self.posts.insert(0, post);
        &mut self.posts[0]
    }

    /// Hydrate every `post-element` in `document`, in document order.
    ///
    /// A document whose root is itself a post element yields that single post.
    /// Returns how many posts were added.
    pub fn hydrate(&mut self, document: &MarkupNode, caption_config: CaptionConfig) -> usize {
        let nodes: Vec<&MarkupNode> = if document.tag.eq_ignore_ascii_case(POST_TAG) {
            vec![document]
        } else {
            document.select_all(POST_TAG)
        };

        let count = nodes.len();
        for node in nodes {
            let mut post = PostRenderModel::from_node(node.clone(), caption_config);
            post.mount();
            self.posts.push(post);
        }

        info!(count, "hydrated timeline posts");
        count
    }

    /// Read a JSON markup document from disk and hydrate it.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing, unreadable, or not markup JSON.
    pub fn load(path: &Path, caption_config: CaptionConfig) -> Result<Self, TimelineError> {
        if !path.exists() {
            return Err(TimelineError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let document: MarkupNode =
            serde_json::from_str(&contents).map_err(|e| TimelineError::Json {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut timeline = Self::new();
        timeline.hydrate(&document, caption_config);
        Ok(timeline)
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether there are no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Post at `index`, newest first.
    pub fn get(&self, index: usize) -> Option<&PostRenderModel> {
        self.posts.get(index)
    }

    /// Mutable post at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PostRenderModel> {
        self.posts.get_mut(index)
    }

    /// Posts in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PostRenderModel> {
        self.posts.iter()
    }

    /// Markup of the whole timeline: a `main` element holding every post.
    pub fn render(&self) -> MarkupNode {
        MarkupNode::new("main").with_children(self.posts.iter().map(PostRenderModel::render))
    }
}
