//! Quick Capture State
//!
//! The capture modal is either closed or open on exactly one tab.

use std::fmt;
use std::str::FromStr;

/// Tabs of the quick-capture modal, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureTab {
    #[default]
    Task,
    Idea,
    Link,
    Note,
}

impl CaptureTab {
    pub const ALL: [CaptureTab; 4] = [CaptureTab::Task, CaptureTab::Idea, CaptureTab::Link, CaptureTab::Note];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureTab::Task => "task",
            CaptureTab::Idea => "idea",
            CaptureTab::Link => "link",
            CaptureTab::Note => "note",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaptureTab::Task => "Task",
            CaptureTab::Idea => "Idea",
            CaptureTab::Link => "Link",
            CaptureTab::Note => "Note",
        }
    }

    /// Id of the tab's panel element
    pub fn panel_id(&self) -> String {
        format!("{}-tab", self.as_str())
    }
}

impl fmt::Display for CaptureTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown capture tab: {}", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for CaptureTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "task" => Ok(CaptureTab::Task),
            "idea" => Ok(CaptureTab::Idea),
            "link" => Ok(CaptureTab::Link),
            "note" => Ok(CaptureTab::Note),
            other => Err(UnknownTab(other.to_string())),
        }
    }
}

/// Quick-capture modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Closed,
    Open(CaptureTab),
}

impl CaptureState {
    pub fn is_open(&self) -> bool {
        matches!(self, CaptureState::Open(_))
    }

    pub fn active_tab(&self) -> Option<CaptureTab> {
        match self {
            CaptureState::Open(tab) => Some(*tab),
            CaptureState::Closed => None,
        }
    }

    /// Whether `tab`'s button and panel carry the `active` class
    pub fn is_active(&self, tab: CaptureTab) -> bool {
        self.active_tab() == Some(tab)
    }

    pub fn open(tab: CaptureTab) -> Self {
        CaptureState::Open(tab)
    }

    /// Switching only applies while the modal is open
    pub fn switch_tab(self, tab: CaptureTab) -> Self {
        match self {
            CaptureState::Open(_) => CaptureState::Open(tab),
            CaptureState::Closed => CaptureState::Closed,
        }
    }

    pub fn close(self) -> Self {
        CaptureState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_idea_activates_only_idea() {
        let state = CaptureState::open(CaptureTab::Idea);
        assert!(state.is_open());
        for tab in CaptureTab::ALL {
            assert_eq!(state.is_active(tab), tab == CaptureTab::Idea, "tab {}", tab);
        }
    }

    #[test]
    fn test_switch_tab_while_open() {
        let state = CaptureState::open(CaptureTab::Task).switch_tab(CaptureTab::Link);
        assert_eq!(state, CaptureState::Open(CaptureTab::Link));
    }

    #[test]
    fn test_switch_tab_while_closed_is_noop() {
        let state = CaptureState::Closed.switch_tab(CaptureTab::Note);
        assert_eq!(state, CaptureState::Closed);
        assert!(CaptureTab::ALL.iter().all(|tab| !state.is_active(*tab)));
    }

    #[test]
    fn test_close_from_any_tab() {
        for tab in CaptureTab::ALL {
            assert_eq!(CaptureState::open(tab).close(), CaptureState::Closed);
        }
    }

    #[test]
    fn test_parse_tab_names() {
        assert_eq!("note".parse::<CaptureTab>(), Ok(CaptureTab::Note));
        assert_eq!(" link ".parse::<CaptureTab>(), Ok(CaptureTab::Link));
        assert_eq!("photo".parse::<CaptureTab>(), Err(UnknownTab("photo".to_string())));
        assert_eq!(CaptureTab::Idea.panel_id(), "idea-tab");
    }
}
