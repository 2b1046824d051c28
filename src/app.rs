//! Focus Frontend App
//!
//! Bootstraps the controller and renders the overlay UI on top of the
//! server-rendered page.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::actions;
use crate::bindings;
use crate::components::{ProjectModal, QuickCapture, SuggestionsPanel, ToastStack};
use crate::config::FocusConfig;
use crate::context::UiController;
use crate::dom;
use crate::forms::FormKind;
use crate::page_forms;
use crate::shortcuts;

#[component]
pub fn App() -> impl IntoView {
    let config = FocusConfig::load();
    let ctrl = UiController::new(config.clone());

    // Provide controller to all children and to the window globals
    provide_context(ctrl);
    ctrl.install();
    bindings::install();
    shortcuts::install(ctrl);

    // Drafts first, so the project list can drop stale selections
    ctrl.restore_drafts();
    Effect::new(move |_| actions::load_projects(ctrl));

    // Forms the server rendered (the app's own ones aren't mounted yet)
    let owned: Vec<&str> = FormKind::ALL.iter().map(FormKind::form_id).collect();
    page_forms::attach(&ctrl.drafts(), config.autosave_debounce_ms, &owned);

    Interval::new(config.completed_poll_ms, dom::update_completed_count).forget();

    tracing::info!("Focus app initialized");

    view! {
        <QuickCapture />
        <SuggestionsPanel />
        <ProjectModal />
        <ToastStack />
    }
}
