//! Collaborating services: modals and post composition.

pub mod content;
pub mod effects;
pub mod modal;

pub use content::ContentService;
pub use effects::FeedEffects;
pub use modal::{ModalRegistry, ModalService, CREATE_POST, PREVIEW_POST};
