//! Keyboard Shortcuts
//!
//! Ctrl/Cmd+K opens quick capture, Ctrl/Cmd+S toggles suggestions, Escape
//! dismisses everything. Tab marks the page as keyboard-navigated until the
//! next mouse press.

use leptos::ev;
use leptos::prelude::*;

use crate::actions;
use crate::capture::CaptureTab;
use crate::context::UiController;
use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    OpenCapture,
    ToggleSuggestions,
    Dismiss,
    KeyboardNavigation,
}

impl Shortcut {
    /// Map a keydown to a shortcut. Ctrl and Cmd are interchangeable.
    pub fn decode(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        let command = ctrl || meta;
        match key {
            "k" if command => Some(Shortcut::OpenCapture),
            "s" if command => Some(Shortcut::ToggleSuggestions),
            "Escape" => Some(Shortcut::Dismiss),
            "Tab" => Some(Shortcut::KeyboardNavigation),
            _ => None,
        }
    }

    /// Browser defaults (bookmark, save page) are suppressed for command shortcuts
    pub fn prevents_default(&self) -> bool {
        matches!(self, Shortcut::OpenCapture | Shortcut::ToggleSuggestions)
    }
}

/// Install the page-lifetime keyboard and mouse listeners
pub fn install(ctrl: UiController) {
    let keydown = window_event_listener(ev::keydown, move |ev| {
        let Some(shortcut) = Shortcut::decode(&ev.key(), ev.ctrl_key(), ev.meta_key()) else {
            return;
        };
        if shortcut.prevents_default() {
            ev.prevent_default();
        }
        match shortcut {
            Shortcut::OpenCapture => ctrl.open_quick_capture(CaptureTab::Task),
            Shortcut::ToggleSuggestions => actions::toggle_suggestions(ctrl, None),
            Shortcut::Dismiss => ctrl.dismiss_all(),
            Shortcut::KeyboardNavigation => dom::set_keyboard_navigation(true),
        }
    });
    let mousedown = window_event_listener(ev::mousedown, |_| dom::set_keyboard_navigation(false));

    // Handles are only needed for removal, and these listeners never go away
    drop((keydown, mousedown));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_shortcuts_need_ctrl_or_meta() {
        assert_eq!(Shortcut::decode("k", true, false), Some(Shortcut::OpenCapture));
        assert_eq!(Shortcut::decode("k", false, true), Some(Shortcut::OpenCapture));
        assert_eq!(Shortcut::decode("k", false, false), None);
        assert_eq!(Shortcut::decode("s", false, true), Some(Shortcut::ToggleSuggestions));
        assert_eq!(Shortcut::decode("s", false, false), None);
    }

    #[test]
    fn test_escape_and_tab_need_no_modifier() {
        assert_eq!(Shortcut::decode("Escape", false, false), Some(Shortcut::Dismiss));
        assert_eq!(Shortcut::decode("Escape", true, false), Some(Shortcut::Dismiss));
        assert_eq!(Shortcut::decode("Tab", false, false), Some(Shortcut::KeyboardNavigation));
    }

    #[test]
    fn test_only_command_shortcuts_prevent_default() {
        assert!(Shortcut::OpenCapture.prevents_default());
        assert!(Shortcut::ToggleSuggestions.prevents_default());
        assert!(!Shortcut::Dismiss.prevents_default());
        assert!(!Shortcut::KeyboardNavigation.prevents_default());
    }
}
