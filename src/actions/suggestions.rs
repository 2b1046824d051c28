//! Smart Suggestions Panel

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::UiController;
use crate::store::{SuggestionsView, UiStateStoreFields};

/// Open, close or flip the panel; every opening fetches a fresh list
pub fn toggle_suggestions(ctrl: UiController, force: Option<bool>) {
    if !ctrl.set_suggestions_open(force) {
        return;
    }

    let view = ctrl.store.suggestions();
    view.set(SuggestionsView::Loading);
    spawn_local(async move {
        let result = ctrl.api().smart_suggestions().await;
        match &result {
            Ok(list) => tracing::debug!(count = list.len(), "suggestions loaded"),
            Err(error) => tracing::error!(%error, "error loading suggestions"),
        }
        view.set(SuggestionsView::from_result(result));
    });
}
