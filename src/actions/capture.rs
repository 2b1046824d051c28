//! Quick Capture Submission

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::capture::CaptureTab;
use crate::context::UiController;
use crate::dom;
use crate::forms::{CapturePayload, IdeaPayload, LinkPayload, NotePayload, TaskPayload};
use crate::toast::ToastKind;

use super::reload_after;

/// Submit whichever capture form belongs to `tab`
pub fn submit_tab(ctrl: UiController, tab: CaptureTab) {
    match tab {
        CaptureTab::Task => submit_capture::<TaskPayload>(ctrl),
        CaptureTab::Idea => submit_capture::<IdeaPayload>(ctrl),
        CaptureTab::Link => submit_capture::<LinkPayload>(ctrl),
        CaptureTab::Note => submit_capture::<NotePayload>(ctrl),
    }
}

/// Validate the form, post it, then close the modal and (maybe) reload
pub fn submit_capture<P>(ctrl: UiController)
where
    P: CapturePayload + 'static,
{
    let fields = ctrl.fields(P::TAB.into()).get_untracked();
    let payload = match P::from_fields(&fields) {
        Ok(payload) => payload,
        Err(invalid) => {
            ctrl.show_toast(invalid.to_string(), ToastKind::Error);
            return;
        }
    };

    spawn_local(async move {
        match ctrl.api().quick_add(&payload).await {
            Ok(()) => {
                tracing::info!(tab = %P::TAB, "quick capture saved");
                ctrl.show_toast(P::SUCCESS_MESSAGE, ToastKind::Success);
                ctrl.close_quick_capture();
                if P::RELOAD.should_reload(&dom::current_path()) {
                    reload_after(ctrl.config().reload_delay_ms);
                }
            }
            Err(error) => {
                tracing::error!(tab = %P::TAB, %error, "quick capture failed");
                ctrl.show_toast(P::FAILURE_MESSAGE, ToastKind::Error);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureState;
    use crate::context::test_controller;
    use crate::forms::FormKind;
    use crate::store::UiStateStoreFields;

    #[test]
    fn test_invalid_task_shows_error_and_keeps_modal_open() {
        let (_owner, ctrl, _) = test_controller();
        ctrl.open_quick_capture(CaptureTab::Task);
        ctrl.edit_field(FormKind::Task, "title", "   ".to_string());

        submit_capture::<TaskPayload>(ctrl);

        let toasts = ctrl.store.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.items()[0].kind, ToastKind::Error);
        assert_eq!(toasts.items()[0].message, "Please enter a task title");
        assert_eq!(ctrl.store.capture().get_untracked(), CaptureState::Open(CaptureTab::Task));
        assert_eq!(ctrl.field(FormKind::Task, "title"), "   ");
    }

    #[test]
    fn test_each_tab_validates_its_own_form() {
        let (_owner, ctrl, _) = test_controller();
        ctrl.edit_field(FormKind::Task, "title", "Valid task".to_string());

        submit_tab(ctrl, CaptureTab::Link);

        let toasts = ctrl.store.toasts().get_untracked();
        assert_eq!(toasts.items()[0].message, "Please enter a URL");
    }
}
