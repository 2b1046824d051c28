//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Visibility classes
//! are derived from these fields, so a modal flag and its class can't disagree.

use reactive_stores::Store;

use crate::capture::CaptureState;
use crate::models::{Project, Suggestion};
use crate::toast::ToastList;

/// What the smart-suggestions panel currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SuggestionsView {
    /// Never opened on this page
    #[default]
    Idle,
    Loading,
    Ready(Vec<Suggestion>),
    Failed,
}

impl SuggestionsView {
    pub fn from_result<E>(result: Result<Vec<Suggestion>, E>) -> Self {
        match result {
            Ok(suggestions) => SuggestionsView::Ready(suggestions),
            Err(_) => SuggestionsView::Failed,
        }
    }

    pub fn is_all_caught_up(&self) -> bool {
        matches!(self, SuggestionsView::Ready(list) if list.is_empty())
    }
}

/// Next open flag for a panel toggle, honoring a forced state
pub fn toggled(open: bool, force: Option<bool>) -> bool {
    force.unwrap_or(!open)
}

/// UI state for one page view
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Quick-capture modal
    pub capture: CaptureState,
    /// Smart-suggestions panel visibility
    pub suggestions_open: bool,
    pub suggestions: SuggestionsView,
    /// New-project modal visibility
    pub project_modal_open: bool,
    /// Projects for the capture forms' selectors
    pub projects: Vec<Project>,
    pub toasts: ToastList,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_without_force() {
        assert!(toggled(false, None));
        assert!(!toggled(true, None));
    }

    #[test]
    fn test_forced_state_wins() {
        assert!(!toggled(true, Some(false)));
        assert!(!toggled(false, Some(false)));
        assert!(toggled(true, Some(true)));
    }

    #[test]
    fn test_suggestions_view_from_result() {
        let empty: Result<Vec<Suggestion>, ()> = Ok(vec![]);
        assert!(SuggestionsView::from_result(empty).is_all_caught_up());

        let failed: Result<Vec<Suggestion>, ()> = Err(());
        assert_eq!(SuggestionsView::from_result(failed), SuggestionsView::Failed);
        assert!(!SuggestionsView::Loading.is_all_caught_up());
    }
}
