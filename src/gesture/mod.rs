//! Swipe gesture core.
//!
//! Pointer events flow into a [`SwipeController`], which records deltas in a
//! [`GeometryBuffer`], scores them with [`momentum`] on release, and picks a
//! [`SwipeOutcome`]. Non-trivial outcomes complete after a delay through the
//! [`SettleQueue`].

pub mod buffer;
pub mod momentum;
pub mod pointer;
pub mod schedule;
pub mod swipe;

pub use buffer::{GeometryBuffer, GEOMETRY_BUFFER_CAPACITY};
pub use momentum::momentum;
pub use pointer::{PointerEvent, PointerPhase, PointerRegion, PointerSample};
pub use schedule::{GestureToken, PendingSettle, SettleQueue};
pub use swipe::{decide_outcome, PanelTransform, Settle, SettleEffects, SwipeController, SwipeState};

use std::time::Duration;

/// Default momentum magnitude a release must exceed to fling.
pub const DEFAULT_MOMENTUM_THRESHOLD: f64 = 15.0;

/// Default exit animation length before a fling's side effect runs.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(320);

/// Default window after a carousel scroll during which drags are ignored.
pub const DEFAULT_CAROUSEL_SUPPRESS: Duration = Duration::from_millis(200);

/// Tunables for the swipe controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Strict bound: only `|momentum| > threshold` flings.
    pub momentum_threshold: f64,
    /// Wait between a fling and its side effect.
    pub settle_delay: Duration,
    /// How long drags are ignored after a carousel scroll.
    pub carousel_suppress: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            momentum_threshold: DEFAULT_MOMENTUM_THRESHOLD,
            settle_delay: DEFAULT_SETTLE_DELAY,
            carousel_suppress: DEFAULT_CAROUSEL_SUPPRESS,
        }
    }
}

/// How a released gesture resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeOutcome {
    /// Return the panel to rest; nothing else happens.
    SnapBack,
    /// Slide the panel down and reopen the compose modal.
    AdvanceToCompose,
    /// Slide the panel up, publish the staged post and close modals.
    CommitPublish,
}

impl SwipeOutcome {
    /// Where the panel animates for this outcome.
    pub fn target(self) -> SettleTarget {
        match self {
            Self::SnapBack => SettleTarget::Origin,
            Self::AdvanceToCompose => SettleTarget::BelowViewport,
            Self::CommitPublish => SettleTarget::AboveViewport,
        }
    }
}

/// Where a settling panel animates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettleTarget {
    /// Resting position.
    Origin,
    /// One full viewport height down.
    BelowViewport,
    /// One full viewport height up.
    AboveViewport,
}

impl SettleTarget {
    /// Offset in pixels for a viewport of the given height.
    pub fn offset_px(self, viewport_height: f64) -> f64 {
        match self {
            Self::Origin => 0.0,
            Self::BelowViewport => viewport_height,
            Self::AboveViewport => -viewport_height,
        }
    }

    /// CSS `translateY` argument.
    pub fn css(self) -> &'static str {
        match self {
            Self::Origin => "0",
            Self::BelowViewport => "100vh",
            Self::AboveViewport => "-100vh",
        }
    }
}
