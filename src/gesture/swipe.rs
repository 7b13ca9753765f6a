//! Swipe state machine for the preview panel.
//!
//! Idle → Dragging on press, Dragging → Settling on release or cancel,
//! Settling → Idle once every pending completion has fired.
//!
//! A press while a completion is still pending is allowed. The new gesture
//! takes ownership of the panel transform (last writer wins), so the stale
//! completion skips its transform reset. Its side effect still runs.

use std::time::{Duration, Instant};

use tracing::debug;

use super::{
    momentum, GeometryBuffer, GestureConfig, GestureToken, PointerEvent, PointerPhase,
    PointerRegion, PointerSample, SettleQueue, SettleTarget, SwipeOutcome,
};
use crate::model::RenderWarning;

/// Observable state of a [`SwipeController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeState {
    /// No drag and nothing pending.
    Idle,
    /// A press is being tracked.
    Dragging,
    /// Released; at least one completion is waiting for its delay.
    Settling,
}

/// Side effects of a completed settle.
///
/// Implemented by whoever owns the modals and the compose state.
pub trait SettleEffects {
    /// Reopen the compose modal.
    fn advance_to_compose(&mut self);
    /// Publish the staged post and close modals.
    fn commit_publish(&mut self);
}

/// Current transform of the preview panel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelTransform {
    /// Vertical offset in pixels. Positive is downward.
    pub offset_px: f64,
    /// While true the offset tracks the pointer directly, unanimated.
    pub dragging: bool,
}

/// What a release decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    /// Gesture that was released.
    pub token: GestureToken,
    /// Score of the buffered deltas.
    pub momentum: f64,
    /// Chosen outcome.
    pub outcome: SwipeOutcome,
    /// Where the panel animates.
    pub target: SettleTarget,
    /// Time until the completion fires. Zero for [`SwipeOutcome::SnapBack`].
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    token: GestureToken,
    origin_y: f64,
    last_y: Option<f64>,
    moves: u64,
}

/// Pick the outcome of a release.
///
/// Momentum is checked first and wins over position. Without a fling, a release
/// more than a quarter viewport below center advances and one more than a quarter
/// above center commits. `release_y` is `None` when the gesture never moved.
pub fn decide_outcome(
    momentum: f64,
    release_y: Option<f64>,
    viewport_height: f64,
    threshold: f64,
) -> SwipeOutcome {
    if momentum > threshold {
        return SwipeOutcome::AdvanceToCompose;
    }
    if momentum < -threshold {
        return SwipeOutcome::CommitPublish;
    }

    if let Some(y) = release_y {
        if viewport_height > 0.0 {
            let from_center = y - viewport_height / 2.0;
            let quarter = viewport_height / 4.0;
            if from_center > quarter {
                return SwipeOutcome::AdvanceToCompose;
            }
            if from_center < -quarter {
                return SwipeOutcome::CommitPublish;
            }
        }
    }

    SwipeOutcome::SnapBack
}

/// Drives the preview panel from pointer events.
///
/// There is one controller per preview surface. It exclusively owns that surface's buffer
/// and transform.
#[derive(Debug, Clone)]
pub struct SwipeController {
    config: GestureConfig,
    viewport_height: f64,
    drag: Option<Drag>,
    buffer: GeometryBuffer,
    last_sample: Option<PointerSample>,
    transform: PanelTransform,
    transform_owner: GestureToken,
    last_token: GestureToken,
    settles: SettleQueue,
    suppressed_until: Option<Instant>,
}

impl SwipeController {
    /// Idle controller for a viewport `viewport_height` pixels tall.
    pub fn new(config: GestureConfig, viewport_height: f64) -> Self {
        Self {
            config,
            viewport_height,
            drag: None,
            buffer: GeometryBuffer::new(),
            last_sample: None,
            transform: PanelTransform::default(),
            transform_owner: GestureToken::default(),
            last_token: GestureToken::default(),
            settles: SettleQueue::new(),
            suppressed_until: None,
        }
    }

    /// Tunables in use.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the viewport height after a resize.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    /// Viewport height in pixels.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Current state, derived from the drag and the pending queue.
    pub fn state(&self) -> SwipeState {
        if self.drag.is_some() {
            SwipeState::Dragging
        } else if !self.settles.is_empty() {
            SwipeState::Settling
        } else {
            SwipeState::Idle
        }
    }

    /// Current panel transform.
    pub fn transform(&self) -> PanelTransform {
        self.transform
    }

    /// Deltas of the active drag.
    pub fn buffer(&self) -> &GeometryBuffer {
        &self.buffer
    }

    /// Most recent move of the active gesture.
    pub fn last_sample(&self) -> Option<PointerSample> {
        self.last_sample
    }

    /// Earliest pending completion, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.settles.next_deadline()
    }

    /// Dispatch a unified pointer event.
    ///
    /// Returns the settle decision when the event ends a gesture.
    pub fn handle(&mut self, event: PointerEvent, now: Instant) -> Option<Settle> {
        match event.phase {
            PointerPhase::Start => {
                self.press(event.y, event.region);
                None
            }
            PointerPhase::Move => {
                self.drag_to(event.y, event.region, now);
                None
            }
            PointerPhase::End | PointerPhase::Cancel => self.release(event.phase, now),
        }
    }

    /// Begin a drag at `y`. Presses over excluded regions are ignored.
    ///
    /// Returns whether a drag started.
    pub fn press(&mut self, y: f64, region: PointerRegion) -> bool {
        if region.is_excluded() {
            debug!(?region, "press over excluded region ignored");
            return false;
        }

        let token = self.last_token.next();
        self.last_token = token;
        self.transform_owner = token;
        self.drag = Some(Drag {
            token,
            origin_y: y,
            last_y: None,
            moves: 0,
        });
        self.buffer.clear();
        self.last_sample = None;
        self.transform.dragging = true;

        debug!(token = token.get(), origin_y = y, "drag started");
        true
    }

    /// Track the pointer at `y`.
    ///
    /// Ignored with no active drag, over an excluded region, or inside the
    /// suppression window after a carousel scroll. Returns whether the move
    /// was applied.
    pub fn drag_to(&mut self, y: f64, region: PointerRegion, now: Instant) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            RenderWarning::UnexpectedGestureEvent {
                phase: PointerPhase::Move,
            }
            .report();
            return false;
        };

        if region.is_excluded() {
            return false;
        }
        if self.suppressed_until.is_some_and(|until| now < until) {
            return false;
        }

        let delta = y - drag.origin_y;
        drag.last_y = Some(y);
        drag.moves += 1;

        self.buffer.push(delta);
        self.last_sample = Some(PointerSample {
            ordinal: drag.moves,
            delta_from_origin: delta,
        });
        self.transform = PanelTransform {
            offset_px: delta,
            dragging: true,
        };
        true
    }

    /// End the active drag and decide its outcome.
    ///
    /// `phase` is `End` or `Cancel`; both settle identically. Returns `None`
    /// when there was no drag to end.
    pub fn release(&mut self, phase: PointerPhase, now: Instant) -> Option<Settle> {
        let Some(drag) = self.drag.take() else {
            RenderWarning::UnexpectedGestureEvent { phase }.report();
            return None;
        };

        let score = momentum(&self.buffer.to_sequence());
        let outcome = decide_outcome(
            score,
            drag.last_y,
            self.viewport_height,
            self.config.momentum_threshold,
        );
        let target = outcome.target();

        let delay = match outcome {
            SwipeOutcome::SnapBack => Duration::ZERO,
            _ => self.config.settle_delay,
        };

        self.transform = PanelTransform {
            offset_px: target.offset_px(self.viewport_height),
            dragging: false,
        };
        if outcome != SwipeOutcome::SnapBack {
            self.settles.schedule(drag.token, now, delay, outcome);
        }

        self.buffer.clear();
        self.last_sample = None;

        debug!(
            token = drag.token.get(),
            momentum = score,
            ?outcome,
            target = target.css(),
            "gesture settled"
        );

        Some(Settle {
            token: drag.token,
            momentum: score,
            outcome,
            target,
            delay,
        })
    }

    /// Abandon the active drag without settling.
    ///
    /// Used when the surface under the drag goes away, so its release can
    /// never arrive. The buffer is cleared and the transform returns to
    /// neutral. Pending completions are left queued. Returns whether a drag
    /// was dropped.
    pub fn cancel_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };

        self.buffer.clear();
        self.last_sample = None;
        self.transform = PanelTransform::default();

        debug!(token = drag.token.get(), "drag abandoned");
        true
    }

    /// Note a horizontal carousel scroll; drags are suppressed briefly after.
    pub fn carousel_scrolled(&mut self, now: Instant) {
        self.suppressed_until = Some(now + self.config.carousel_suppress);
    }

    /// Run every completion due at `now`.
    ///
    /// A completion resets the transform only if its gesture still owns it.
    /// Returns the outcomes that fired, in order.
    pub fn poll(&mut self, now: Instant, effects: &mut dyn SettleEffects) -> Vec<SwipeOutcome> {
        let due = self.settles.take_due(now);
        let mut fired = Vec::with_capacity(due.len());

        for pending in due {
            if pending.token == self.transform_owner {
                self.transform = PanelTransform::default();
            } else {
                debug!(
                    token = pending.token.get(),
                    owner = self.transform_owner.get(),
                    "stale completion, transform left to newer gesture"
                );
            }

            match pending.outcome {
                SwipeOutcome::AdvanceToCompose => effects.advance_to_compose(),
                SwipeOutcome::CommitPublish => effects.commit_publish(),
                SwipeOutcome::SnapBack => {}
            }
            fired.push(pending.outcome);
        }

        fired
    }
}
