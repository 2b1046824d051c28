//! Quick Capture Modal
//!
//! Tabbed modal for capturing a task, idea, link or note without leaving the page.

use leptos::prelude::*;

use crate::capture::CaptureTab;
use crate::context::use_controller;
use crate::store::UiStateStoreFields;

use super::capture_forms::{IdeaForm, LinkForm, NoteForm, TaskForm};
use super::is_backdrop_click;

#[component]
pub fn QuickCapture() -> impl IntoView {
    let ctrl = use_controller();
    let state = move || ctrl.store.capture().get();

    let panel = move |tab: CaptureTab, form: AnyView| {
        view! {
            <div id=tab.panel_id() class="tab-panel" class:active=move || state().is_active(tab)>
                {form}
            </div>
        }
    };

    view! {
        <div
            id="quick-capture-modal"
            class="modal-overlay"
            class:hidden=move || !state().is_open()
            on:click=move |ev| {
                if is_backdrop_click(&ev) {
                    ctrl.close_quick_capture();
                }
            }
        >
            <div class="modal quick-capture">
                <div class="modal-header">
                    <h2>"Quick Capture"</h2>
                    <button type="button" class="modal-close" title="Close (Esc)" on:click=move |_| ctrl.close_quick_capture()>
                        "×"
                    </button>
                </div>

                <div class="tab-bar">
                    {CaptureTab::ALL.into_iter().map(|tab| view! {
                        <button
                            type="button"
                            class="tab-btn"
                            class:active=move || state().is_active(tab)
                            data-tab=tab.as_str()
                            on:click=move |_| ctrl.switch_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }).collect_view()}
                </div>

                {panel(CaptureTab::Task, view! { <TaskForm /> }.into_any())}
                {panel(CaptureTab::Idea, view! { <IdeaForm /> }.into_any())}
                {panel(CaptureTab::Link, view! { <LinkForm /> }.into_any())}
                {panel(CaptureTab::Note, view! { <NoteForm /> }.into_any())}
            </div>
        </div>
    }
}
