//! Layout and timing constants for TUI rendering.

use std::time::Duration;

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for the compose and preview modals.
pub const MODAL_WIDTH_PERCENT: u16 = 70;

/// Height percentage for the compose and preview modals.
pub const MODAL_HEIGHT_PERCENT: u16 = 80;

/// Event poll timeout while a swipe completion is pending.
pub const SETTLE_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Event poll timeout when idle.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(500);
