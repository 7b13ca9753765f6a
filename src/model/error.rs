//! Error types for feedswipe.
//!
//! Two kinds of failure live here:
//!
//! - [`AppError`] and [`TimelineError`] are real errors. They are returned as `Err` from the
//!   impure shell (file loading, terminal setup) and propagate with `?`.
//! - [`RenderWarning`] is the non-fatal taxonomy. Hydration, rendering and gesture handling
//!   never abort. They log a warning and fall back to a neutral default (zero counts, "now",
//!   empty caption, snap-back).

use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ConfigError;
use crate::gesture::PointerPhase;
use crate::logging::LoggingError;

/// Top-level application error.
///
/// Every variant is fatal for the binary. Library operations that can
/// degrade gracefully report [`RenderWarning`]s instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Timeline markup document could not be loaded.
    #[error("Failed to load timeline: {0}")]
    Timeline(#[from] TimelineError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors loading a timeline markup document from disk.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The document path does not exist.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use feedswipe::model::TimelineError;
    ///
    /// let err = TimelineError::FileNotFound { path: PathBuf::from("/tmp/feed.json") };
    /// assert!(err.to_string().contains("/tmp/feed.json"));
    /// ```
    #[error("Timeline file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The document exists but is not valid markup JSON.
    #[error("Invalid markup in {path}: {reason}")]
    Json {
        /// Offending file.
        path: PathBuf,
        /// serde_json error message.
        reason: String,
    },

    /// Any other I/O failure while reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A recoverable problem found while hydrating, rendering or handling gestures.
///
/// These are reported, never propagated. Call [`RenderWarning::report`] to log one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderWarning {
    /// A region the operation expected is absent from the markup.
    #[error("Missing target element: {selector}")]
    MissingTargetElement {
        /// Selector (or modal id) that matched nothing.
        selector: String,
    },

    /// A numeric attribute did not parse as an integer. The value was coerced.
    #[error("Malformed numeric attribute {attribute} on {selector}: {value:?}")]
    MalformedNumericAttribute {
        /// Selector of the element carrying the attribute.
        selector: String,
        /// Attribute name.
        attribute: String,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A move or end event arrived without a start.
    #[error("Unexpected gesture event: {phase:?} without a start")]
    UnexpectedGestureEvent {
        /// Phase of the ignored event.
        phase: PointerPhase,
    },
}

impl RenderWarning {
    /// Shorthand for [`RenderWarning::MissingTargetElement`].
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingTargetElement {
            selector: selector.into(),
        }
    }

    /// Shorthand for [`RenderWarning::MalformedNumericAttribute`].
    pub fn malformed(
        selector: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedNumericAttribute {
            selector: selector.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Log the warning.
    ///
    /// Gesture warnings are silent at the default level.
    pub fn report(&self) {
        match self {
            Self::UnexpectedGestureEvent { .. } => debug!(warning = %self, "ignored"),
            _ => warn!(warning = %self, "degraded to default"),
        }
    }
}
