//! UI state and the handlers that mutate it.
//!
//! Nothing here touches the terminal; every transition is testable without a TUI.

pub mod app_state;
pub mod compose_handler;
pub mod mouse_handler;
pub mod timeline_handler;

pub use app_state::AppState;
pub use compose_handler::handle_modal_key;
pub use mouse_handler::{
    classify_region, handle_preview_mouse, handle_timeline_mouse, PreviewHitAreas,
};
pub use timeline_handler::{handle_timeline_action, scroll_timeline};
