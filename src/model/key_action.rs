//! Timeline keyboard actions independent of key bindings.

/// User intents that keys map to.
///
/// Mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`KeyBindings`](crate::config::KeyBindings). Compose-mode text entry bypasses
/// this table entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the timeline up one line. Default: k/↑
    ScrollUp,
    /// Scroll the timeline down one line. Default: j/↓
    ScrollDown,
    /// Jump to the newest post. Default: g/Home
    ScrollToTop,

    // Post focus
    /// Focus the next (older) post. Default: J/Tab
    NextPost,
    /// Focus the previous (newer) post. Default: K/Shift+Tab
    PrevPost,

    // Post interaction
    /// Like or unlike the focused post. Default: l
    ToggleLike,
    /// Expand or collapse the focused caption. Default: Enter/Space
    ToggleCaption,

    // Composition
    /// Open the compose modal. Default: n
    Compose,

    // Application
    /// Quit. Default: q
    Quit,
}
