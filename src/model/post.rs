//! Canonical post data.
//!
//! A [`Post`] is the source of truth for everything shown on the timeline.
//! Its markup projection is derived from it and can be thrown away at any time.

use chrono::{DateTime, Utc};

/// Identity of the person who wrote a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    /// Display name, e.g. "Rida F'kih".
    pub full_name: String,
    /// Handle including the leading `@`.
    pub handle: String,
    /// Avatar image URL. `None` until one is assigned.
    pub avatar_url: Option<String>,
}

impl Author {
    /// Create an author without an avatar.
    pub fn new(full_name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            handle: handle.into(),
            avatar_url: None,
        }
    }

    /// Attach an avatar URL.
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

/// The three reaction counters shown under every post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReactionKind {
    /// Likes.
    #[default]
    Likes,
    /// Comments.
    Comments,
    /// Shares.
    Shares,
}

impl ReactionKind {
    /// All kinds in display order.
    pub const ALL: [ReactionKind; 3] = [Self::Likes, Self::Comments, Self::Shares];

    /// Class name of the `.action` region holding this counter.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Likes => "likes",
            Self::Comments => "comments",
            Self::Shares => "shares",
        }
    }
}

/// Reaction counters. Counts are unsigned so they can never go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reactions {
    /// Like count.
    pub likes: u32,
    /// Comment count.
    pub comments: u32,
    /// Share count.
    pub shares: u32,
}

impl Reactions {
    /// Read a single counter.
    pub fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Likes => self.likes,
            ReactionKind::Comments => self.comments,
            ReactionKind::Shares => self.shares,
        }
    }

    /// Apply a partial update.
    ///
    /// Only fields that are `Some` are overwritten. `Some(0)` zeroes the
    /// counter; "not provided" is `None`, never a falsy value.
    pub fn apply(&mut self, update: ReactionsUpdate) {
        if let Some(likes) = update.likes {
            self.likes = likes;
        }
        if let Some(comments) = update.comments {
            self.comments = comments;
        }
        if let Some(shares) = update.shares {
            self.shares = shares;
        }
    }
}

/// Partial reaction update with an explicit "unset" sentinel per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionsUpdate {
    /// New like count.
    pub likes: Option<u32>,
    /// New comment count.
    pub comments: Option<u32>,
    /// New share count.
    pub shares: Option<u32>,
}

impl ReactionsUpdate {
    /// Update nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the like count.
    pub fn likes(mut self, count: u32) -> Self {
        self.likes = Some(count);
        self
    }

    /// Set the comment count.
    pub fn comments(mut self, count: u32) -> Self {
        self.comments = Some(count);
        self
    }

    /// Set the share count.
    pub fn shares(mut self, count: u32) -> Self {
        self.shares = Some(count);
        self
    }

    /// Set the field for `kind`.
    pub fn with(self, kind: ReactionKind, count: u32) -> Self {
        match kind {
            ReactionKind::Likes => self.likes(count),
            ReactionKind::Comments => self.comments(count),
            ReactionKind::Shares => self.shares(count),
        }
    }
}

impl From<Reactions> for ReactionsUpdate {
    fn from(r: Reactions) -> Self {
        Self {
            likes: Some(r.likes),
            comments: Some(r.comments),
            shares: Some(r.shares),
        }
    }
}

/// A single timeline post.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Who wrote it.
    pub author: Author,
    /// When it was posted.
    pub posted_at: DateTime<Utc>,
    /// Full caption text.
    pub caption: String,
    /// Image URLs in carousel order.
    pub images: Vec<String>,
    /// Reaction counters.
    pub reactions: Reactions,
    /// Whether the local user has liked this post.
    pub liked: bool,
    /// Whether the local user composed this post.
    pub user_posted: bool,
}

impl Default for Post {
    fn default() -> Self {
        Self {
            author: Author::default(),
            posted_at: Utc::now(),
            caption: String::new(),
            images: Vec::new(),
            reactions: Reactions::default(),
            liked: false,
            user_posted: false,
        }
    }
}

impl Post {
    /// Flip `liked` and move the like counter with it.
    ///
    /// The counter saturates at zero.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
        self.reactions.likes = if self.liked {
            self.reactions.likes.saturating_add(1)
        } else {
            self.reactions.likes.saturating_sub(1)
        };
    }
}
