//! Domain-level keyboard actions independent of key bindings.

/// User intent in the contact browser.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the list up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the list down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the list. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the list. Default: G/End
    ScrollToBottom,

    // Grouping
    /// Switch to the next group mode. Default: m
    CycleGroupMode,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action moves the scroll position.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
