//! Unified pointer input.
//!
//! Touch and mouse sources are adapted into [`PointerEvent`] at the boundary,
//! so the swipe controller only ever sees one shape.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Press.
    Start,
    /// Pointer moved while pressed.
    Move,
    /// Release.
    End,
    /// Interrupted by the platform. Settles like a release.
    Cancel,
}

/// What the pointer is over when the event fires.
///
/// Presses and moves over the non-`Surface` regions must not drive a
/// vertical drag: the carousel scrolls horizontally and an overflowing
/// caption scrolls on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PointerRegion {
    /// The panel itself.
    #[default]
    Surface,
    /// The horizontally scrolling image carousel.
    Carousel,
    /// A caption box whose text overflows.
    ScrollableCaption,
}

impl PointerRegion {
    /// Whether events here must not drive a drag.
    pub fn is_excluded(self) -> bool {
        !matches!(self, Self::Surface)
    }
}

/// A single pointer event in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Lifecycle phase.
    pub phase: PointerPhase,
    /// Vertical viewport coordinate. Ignored for `End` and `Cancel`.
    pub y: f64,
    /// Region under the pointer.
    pub region: PointerRegion,
}

impl PointerEvent {
    /// Event over the surface.
    pub fn new(phase: PointerPhase, y: f64) -> Self {
        Self {
            phase,
            y,
            region: PointerRegion::Surface,
        }
    }

    /// Press at `y`.
    pub fn start(y: f64) -> Self {
        Self::new(PointerPhase::Start, y)
    }

    /// Move to `y`.
    pub fn moved(y: f64) -> Self {
        Self::new(PointerPhase::Move, y)
    }

    /// Release.
    pub fn end() -> Self {
        Self::new(PointerPhase::End, 0.0)
    }

    /// Cancellation.
    pub fn cancel() -> Self {
        Self::new(PointerPhase::Cancel, 0.0)
    }

    /// Same event over `region`.
    pub fn in_region(mut self, region: PointerRegion) -> Self {
        self.region = region;
        self
    }

    /// Adapt a touch event. The first active touch point drives the gesture;
    /// an end with no remaining touches carries no coordinate.
    pub fn from_touch(phase: PointerPhase, touches_y: &[f64], region: PointerRegion) -> Self {
        let y = touches_y.first().copied().unwrap_or(0.0);
        Self::new(phase, y).in_region(region)
    }

    /// Adapt a terminal mouse event. Rows are scaled by `cell_height_px`.
    ///
    /// Only the left button participates; everything else returns `None`.
    pub fn from_mouse(mouse: MouseEvent, cell_height_px: f64, region: PointerRegion) -> Option<Self> {
        let phase = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerPhase::Start,
            MouseEventKind::Drag(MouseButton::Left) => PointerPhase::Move,
            MouseEventKind::Up(MouseButton::Left) => PointerPhase::End,
            _ => return None,
        };
        let y = f64::from(mouse.row) * cell_height_px;
        Some(Self::new(phase, y).in_region(region))
    }
}

/// One recorded move of a gesture.
///
/// `ordinal` counts moves since the press. The delta is relative to the press origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Moves since the press, starting at 1.
    pub ordinal: u64,
    /// Vertical offset from the press point.
    pub delta_from_origin: f64,
}
