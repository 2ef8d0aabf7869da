//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<(KeyCode, KeyModifiers), KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event. Release events never match.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        self.bindings.get(&(key.code, key.modifiers)).copied()
    }

    /// Bind (or rebind) a key.
    pub fn insert(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert((code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Vim-style scrolling
        keys.insert(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.insert(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.insert(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        // Terminals disagree on whether 'G' carries SHIFT
        keys.insert(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);
        keys.insert(KeyCode::Char('G'), KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Arrow keys
        keys.insert(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.insert(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.insert(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.insert(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Page navigation
        keys.insert(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.insert(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.insert(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        keys.insert(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);

        keys.insert(KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::CycleGroupMode);

        // Application controls
        keys.insert(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.insert(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
