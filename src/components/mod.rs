//! UI Components
//!
//! Leptos components for the overlay UI: capture modal, suggestions panel,
//! project modal and toasts.

mod fields;
mod project_select;
mod capture_forms;
mod quick_capture;
mod suggestions_panel;
mod project_modal;
mod toast_stack;

pub use quick_capture::QuickCapture;
pub use suggestions_panel::SuggestionsPanel;
pub use project_modal::ProjectModal;
pub use toast_stack::ToastStack;

/// Whether a click landed on the overlay itself rather than on the dialog inside it
pub(crate) fn is_backdrop_click(ev: &web_sys::MouseEvent) -> bool {
    ev.target().is_some() && ev.target() == ev.current_target()
}
