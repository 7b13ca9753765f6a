//! A post and its markup projection.
//!
//! [`PostRenderModel`] owns the canonical [`Post`]. The markup it renders is
//! disposable and regenerated from the post on demand. The one exception is
//! hydration, where an existing node is read once to build the post.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::caption::{collapse_caption, CaptionConfig, CaptionLayout, ELLIPSIS};
use crate::markup::MarkupNode;
use crate::model::{Author, Post, ReactionKind, Reactions, ReactionsUpdate, RenderWarning};
use crate::render::carousel::{carousel_index_for, indicators};
use crate::render::Timeline;

/// Tag of a rendered post element.
pub const POST_TAG: &str = "post-element";

/// Attribute holding milliseconds since the Unix epoch.
pub const POSTED_DATE_ATTR: &str = "data-posted-date";

/// Attribute holding a reaction count.
pub const COUNT_ATTR: &str = "data-count";

/// Display format of the posted date.
pub const DATE_FORMAT: &str = "%b %-d, %Y";

/// Canonical post plus presentation state.
#[derive(Debug, Clone)]
pub struct PostRenderModel {
    post: Post,
    caption_config: CaptionConfig,
    caption_collapsed: bool,
    carousel_index: usize,
    node_import: Option<MarkupNode>,
    projection: Option<MarkupNode>,
}

impl Default for PostRenderModel {
    fn default() -> Self {
        Self::new(CaptionConfig::default())
    }
}

impl PostRenderModel {
    /// An empty post for composition.
    pub fn new(caption_config: CaptionConfig) -> Self {
        Self {
            post: Post::default(),
            caption_config,
            caption_collapsed: true,
            carousel_index: 0,
            node_import: None,
            projection: None,
        }
    }

    /// A post that hydrates from `node` when mounted.
    pub fn from_node(node: MarkupNode, caption_config: CaptionConfig) -> Self {
        Self {
            node_import: Some(node),
            ..Self::new(caption_config)
        }
    }

    /// Canonical post data.
    pub fn post(&self) -> &Post {
        &self.post
    }

    // ===== Fluent setters =====

    /// Set the author name and handle.
    pub fn set_author(&mut self, full_name: impl Into<String>, handle: impl Into<String>) -> &mut Self {
        self.post.author.full_name = full_name.into();
        self.post.author.handle = handle.into();
        self.refresh()
    }

    /// Assign the avatar. An avatar that is already set is kept.
    pub fn set_avatar(&mut self, url: impl Into<String>) -> &mut Self {
        if self.post.author.avatar_url.is_none() {
            self.post.author.avatar_url = Some(url.into());
        }
        self.refresh()
    }

    /// Replace the caption. It starts collapsed again.
    pub fn set_caption(&mut self, caption: impl Into<String>) -> &mut Self {
        self.post.caption = caption.into();
        self.caption_collapsed = true;
        self.refresh()
    }

    /// Replace the images. An empty list leaves the current images in place.
    pub fn set_images(&mut self, urls: Vec<String>) -> &mut Self {
        if !urls.is_empty() {
            self.post.images = urls;
            self.carousel_index = 0;
        }
        self.refresh()
    }

    /// Set the posted date.
    pub fn set_date(&mut self, posted_at: DateTime<Utc>) -> &mut Self {
        self.post.posted_at = posted_at;
        self.refresh()
    }

    /// Overwrite the counters that `update` provides.
    pub fn set_reactions(&mut self, update: ReactionsUpdate) -> &mut Self {
        self.post.reactions.apply(update);
        self.refresh()
    }

    /// Mark as composed by the local user.
    pub fn set_user_posted(&mut self) -> &mut Self {
        self.post.user_posted = true;
        self.refresh()
    }

    /// Change the caption collapse limits.
    pub fn set_caption_config(&mut self, config: CaptionConfig) -> &mut Self {
        self.caption_config = config;
        self.refresh()
    }

    // ===== Interaction =====

    /// Like or unlike. The like counter follows and never goes negative.
    pub fn toggle_like(&mut self) -> &mut Self {
        self.post.toggle_like();
        debug!(liked = self.post.liked, likes = self.post.reactions.likes, "like toggled");
        self.refresh()
    }

    /// Expand or collapse the caption. Returns the new collapsed state.
    ///
    /// Captions too short to collapse ignore the toggle.
    pub fn toggle_caption(&mut self) -> bool {
        if self.caption_layout().collapsible {
            self.caption_collapsed = !self.caption_collapsed;
            self.refresh();
        }
        self.caption_collapsed
    }

    /// Whether the caption is currently collapsed.
    pub fn caption_collapsed(&self) -> bool {
        self.caption_collapsed
    }

    /// Sync the carousel indicator to a horizontal scroll position.
    pub fn scroll_carousel(&mut self, scroll_left: f64, client_width: f64) -> usize {
        self.carousel_index = carousel_index_for(scroll_left, client_width, self.post.images.len());
        self.refresh();
        self.carousel_index
    }

    /// Index of the image in view.
    pub fn carousel_index(&self) -> usize {
        self.carousel_index
    }

    /// Collapse split of the caption under the current limits.
    pub fn caption_layout(&self) -> CaptionLayout {
        collapse_caption(&self.post.caption, self.caption_config)
    }

    // ===== Lifecycle =====

    /// Attach to the page: hydrate from the import node if there is one,
    /// then render.
    pub fn mount(&mut self) -> &MarkupNode {
        if let Some(node) = self.node_import.take() {
            self.import_from_node(&node);
        }
        let rendered = self.render();
        self.projection.insert(rendered)
    }

    /// Whether a projection exists.
    pub fn is_rendered(&self) -> bool {
        self.projection.is_some()
    }

    /// The current projection, if mounted.
    pub fn projection(&self) -> Option<&MarkupNode> {
        self.projection.as_ref()
    }

    /// Mount and insert at the head of `timeline`.
    pub fn bind_to_timeline(self, timeline: &mut Timeline) -> &mut PostRenderModel {
        timeline.prepend(self)
    }

    fn refresh(&mut self) -> &mut Self {
        if self.projection.is_some() {
            self.projection = Some(self.render());
        }
        self
    }

    // ===== Hydration =====

    /// Read every field from pre-rendered markup.
    ///
    /// Missing regions and unparsable numbers degrade to defaults. Each problem
    /// is logged and returned.
    pub fn import_from_node(&mut self, node: &MarkupNode) -> Vec<RenderWarning> {
        let mut warnings = Vec::new();

        let full_name = text_of(node, ".full-name", &mut warnings);
        let handle = text_of(node, ".handle", &mut warnings);
        let avatar_url = match node.select(".avatar") {
            Some(avatar) => avatar.attr("src").map(str::to_string),
            None => {
                warnings.push(RenderWarning::missing(".avatar"));
                None
            }
        };
        self.post.author = Author {
            full_name,
            handle,
            avatar_url,
        };

        self.post.posted_at = posted_date_of(node, &mut warnings);

        self.post.images = node
            .select_all(".cover-container img")
            .into_iter()
            .filter_map(|img| img.attr("src"))
            .map(str::to_string)
            .collect();
        self.carousel_index = 0;

        self.post.caption = match node.select(".caption") {
            Some(caption) => caption_text_of(caption),
            None => {
                warnings.push(RenderWarning::missing(".caption"));
                String::new()
            }
        };
        self.caption_collapsed = true;

        let mut reactions = Reactions::default();
        for kind in ReactionKind::ALL {
            let count = count_of(node, kind, &mut warnings);
            reactions.apply(ReactionsUpdate::none().with(kind, count));
        }
        self.post.reactions = reactions;
        self.post.liked = node
            .select(".action.likes")
            .is_some_and(|likes| likes.has_class("liked"));
        self.post.user_posted = node.has_class("user-posted");

        for warning in &warnings {
            warning.report();
        }
        self.refresh();
        warnings
    }

    // ===== Projection =====

    /// Build the markup for the current state.
    pub fn render(&self) -> MarkupNode {
        let post = &self.post;

        let mut avatar = MarkupNode::new("img").with_class("avatar");
        if let Some(url) = &post.author.avatar_url {
            avatar = avatar.with_attr("src", url);
        }
        let header = MarkupNode::new("div")
            .with_class("header")
            .with_child(avatar)
            .with_child(
                MarkupNode::new("div")
                    .with_class("names")
                    .with_child(MarkupNode::new("span").with_class("full-name").with_text(&post.author.full_name))
                    .with_child(MarkupNode::new("span").with_class("handle").with_text(&post.author.handle)),
            )
            .with_child(
                MarkupNode::new("span")
                    .with_class("date")
                    .with_text(post.posted_at.format(DATE_FORMAT).to_string()),
            );

        let covers = post
            .images
            .iter()
            .map(|url| MarkupNode::new("img").with_class("cover").with_attr("src", url));
        let indicator_nodes = indicators(post.images.len(), self.carousel_index)
            .into_iter()
            .map(|active| {
                MarkupNode::new("div")
                    .with_class("indicator")
                    .with_class(if active { "active" } else { "" })
            });
        let images = MarkupNode::new("div")
            .with_class("image-container")
            .with_child(MarkupNode::new("div").with_class("cover-container").with_children(covers))
            .with_child(MarkupNode::new("div").with_class("image-count").with_children(indicator_nodes));

        let actions = MarkupNode::new("div").with_class("actions").with_children(
            ReactionKind::ALL.into_iter().map(|kind| {
                let mut action = MarkupNode::new("div")
                    .with_class("action")
                    .with_class(kind.class_name())
                    .with_attr(COUNT_ATTR, post.reactions.get(kind).to_string())
                    .with_child(MarkupNode::new("button").with_class("action-button"));
                if kind == ReactionKind::Likes && post.liked {
                    action = action.with_class("liked");
                }
                action
            }),
        );

        let body = MarkupNode::new("div")
            .with_class("post")
            .with_attr(POSTED_DATE_ATTR, post.posted_at.timestamp_millis().to_string())
            .with_child(header)
            .with_child(images)
            .with_child(self.render_caption())
            .with_child(actions);

        MarkupNode::new(POST_TAG)
            .with_class("populated")
            .with_class(if post.user_posted { "user-posted" } else { "" })
            .with_child(body)
    }

    fn render_caption(&self) -> MarkupNode {
        let layout = self.caption_layout();
        let node = MarkupNode::new("div").with_class("caption");

        if !layout.collapsible {
            return node.with_text(layout.preview_text);
        }

        node.with_class("collapsable")
            .with_class(if self.caption_collapsed { "collapsed" } else { "" })
            .with_child(MarkupNode::new("p").with_class("preview").with_text(layout.preview_text))
            .with_child(MarkupNode::new("p").with_class("ellipses").with_text(ELLIPSIS))
            .with_child(MarkupNode::new("p").with_class("hidden").with_text(layout.hidden_text))
    }
}

fn text_of(node: &MarkupNode, selector: &str, warnings: &mut Vec<RenderWarning>) -> String {
    match node.select(selector) {
        Some(found) => found.text_content(),
        None => {
            warnings.push(RenderWarning::missing(selector));
            String::new()
        }
    }
}

fn posted_date_of(node: &MarkupNode, warnings: &mut Vec<RenderWarning>) -> DateTime<Utc> {
    let Some(post) = node.select(".post") else {
        warnings.push(RenderWarning::missing(".post"));
        return Utc::now();
    };
    let Some(raw) = post.attr(POSTED_DATE_ATTR) else {
        warnings.push(RenderWarning::malformed(".post", POSTED_DATE_ATTR, ""));
        return Utc::now();
    };

    match raw.trim().parse::<i64>().ok().and_then(DateTime::<Utc>::from_timestamp_millis) {
        Some(date) => date,
        None => {
            warnings.push(RenderWarning::malformed(".post", POSTED_DATE_ATTR, raw));
            Utc::now()
        }
    }
}

/// Caption text, skipping a presentational ellipsis if the node is already split.
fn caption_text_of(caption: &MarkupNode) -> String {
    match (caption.select(".preview"), caption.select(".hidden")) {
        (Some(preview), Some(hidden)) => {
            format!("{}{}", preview.text_content(), hidden.text_content())
        }
        _ => caption.text_content(),
    }
}

fn count_of(node: &MarkupNode, kind: ReactionKind, warnings: &mut Vec<RenderWarning>) -> u32 {
    let selector = format!(".action.{}", kind.class_name());
    let Some(action) = node.select(&selector) else {
        warnings.push(RenderWarning::missing(selector));
        return 0;
    };
    let Some(raw) = action.attr(COUNT_ATTR) else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(count) => count,
        Err(_) => {
            warnings.push(RenderWarning::malformed(selector, COUNT_ATTR, raw));
            0
        }
    }
}

#[cfg(test)]
#[path = "post_model_tests.rs"]
mod tests;
