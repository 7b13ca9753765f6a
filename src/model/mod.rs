//! Domain model types (pure).

pub mod error;
pub mod key_action;
pub mod post;

// Re-export for convenience
pub use error::{AppError, RenderWarning, TimelineError};
pub use key_action::KeyAction;
pub use post::{Author, Post, ReactionKind, Reactions, ReactionsUpdate};
