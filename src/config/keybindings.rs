//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to timeline actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let table = [
            (KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown),
            (KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown),
            (KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp),
            (KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp),
            (KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop),
            (KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop),
            (KeyCode::Char('J'), KeyModifiers::SHIFT, KeyAction::NextPost),
            (KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextPost),
            (KeyCode::Char('K'), KeyModifiers::SHIFT, KeyAction::PrevPost),
            (KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevPost),
            (KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::ToggleLike),
            (KeyCode::Enter, KeyModifiers::NONE, KeyAction::ToggleCaption),
            (KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::ToggleCaption),
            (KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::Compose),
            (KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit),
        ];

        let bindings = table
            .into_iter()
            .map(|(code, modifiers, action)| (KeyEvent::new(code, modifiers), action))
            .collect();

        Self { bindings }
    }
}
