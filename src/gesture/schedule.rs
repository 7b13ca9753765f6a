//! Delayed settle continuations.
//!
//! Each gesture gets a [`GestureToken`]. A continuation scheduled by a
//! gesture carries that token, so the owner can tell whether the panel
//! transform is still its to reset when the continuation fires.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::SwipeOutcome;

/// Identity of a single gesture. Monotonic per controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GestureToken(u64);

impl GestureToken {
    /// Raw value, for logging.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The token following this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A settle completion waiting for its delay to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSettle {
    /// Gesture that scheduled it.
    pub token: GestureToken,
    /// When it fires.
    pub due: Instant,
    /// Side effect to run.
    pub outcome: SwipeOutcome,
}

/// Pending settle completions.
///
/// Rapid successive gestures may queue several. They are never dropped:
/// each one is yielded once its deadline passes, in deadline order.
#[derive(Debug, Clone, Default)]
pub struct SettleQueue {
    pending: VecDeque<PendingSettle>,
}

impl SettleQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `outcome` to fire `delay` after `now`.
    pub fn schedule(&mut self, token: GestureToken, now: Instant, delay: Duration, outcome: SwipeOutcome) {
        self.pending.push_back(PendingSettle {
            token,
            due: now + delay,
            outcome,
        });
    }

    /// Remove and return every continuation due at `now`, ordered by deadline
    /// then token.
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingSettle> {
        let mut due = Vec::new();
        let mut remaining = VecDeque::with_capacity(self.pending.len());
        for pending in self.pending.drain(..) {
            if pending.due <= now {
                due.push(pending);
            } else {
                remaining.push_back(pending);
            }
        }
        self.pending = remaining;
        due.sort_by_key(|p| (p.due, p.token));
        due
    }

    /// Earliest deadline, if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending continuations.
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
