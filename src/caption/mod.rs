//! Caption truncation.
//!
//! Decides whether a caption is long enough to collapse behind an expand
//! affordance, and where to split it. Pure: the same text and config always
//! produce the same layout.

/// Presentational marker shown between the preview and hidden parts.
pub const ELLIPSIS: &str = "...";

/// Default character cutoff.
pub const DEFAULT_CUTOFF: usize = 240;

/// Default newline limit.
pub const DEFAULT_NEWLINE_LIMIT: usize = 6;

/// Collapse tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionConfig {
    /// Characters shown before collapsing.
    pub cutoff: usize,
    /// Newlines shown before collapsing.
    pub newline_limit: usize,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            newline_limit: DEFAULT_NEWLINE_LIMIT,
        }
    }
}

/// Derived split of a caption.
///
/// `preview_text + hidden_text` always equals the caption. The ellipsis is
/// not part of either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionLayout {
    /// Whether the caption is long enough to collapse.
    pub collapsible: bool,
    /// Text shown while collapsed.
    pub preview_text: String,
    /// Text revealed on expand. Empty when not collapsible.
    pub hidden_text: String,
}

impl CaptionLayout {
    /// The caption as shown while collapsed, ellipsis included.
    pub fn collapsed_text(&self) -> String {
        if self.collapsible {
            format!("{}{}", self.preview_text, ELLIPSIS)
        } else {
            self.preview_text.clone()
        }
    }

    /// The full caption.
    pub fn full_text(&self) -> String {
        format!("{}{}", self.preview_text, self.hidden_text)
    }
}

/// Compute the layout of `caption`.
///
/// The cutoff counts characters, not bytes. A caption with more than
/// `newline_limit` newlines is cut at its `newline_limit`-th newline (0-indexed),
/// as long as that newline sits past index `newline_limit`. A caption is
/// collapsible when it is longer than the effective cutoff or the newline cut applied.
///
/// ```
/// use feedswipe::caption::{collapse_caption, CaptionConfig};
///
/// let layout = collapse_caption("short text", CaptionConfig::default());
/// assert!(!layout.collapsible);
/// assert_eq!(layout.preview_text, "short text");
/// assert_eq!(layout.hidden_text, "");
/// ```
pub fn collapse_caption(caption: &str, config: CaptionConfig) -> CaptionLayout {
    let chars: Vec<char> = caption.chars().collect();

    let newline_cut = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == '\n')
        .map(|(i, _)| i)
        .nth(config.newline_limit)
        .filter(|index| *index > config.newline_limit);

    let cutoff = newline_cut.unwrap_or(config.cutoff);
    let collapsible = chars.len() > cutoff || newline_cut.is_some();

    if !collapsible {
        return CaptionLayout {
            collapsible: false,
            preview_text: caption.to_string(),
            hidden_text: String::new(),
        };
    }

    let split = cutoff.min(chars.len());
    CaptionLayout {
        collapsible: true,
        preview_text: chars[..split].iter().collect(),
        hidden_text: chars[split..].iter().collect(),
    }
}
