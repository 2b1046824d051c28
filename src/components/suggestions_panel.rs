//! Smart Suggestions Panel
//!
//! Shows the server's "next best moves". Clicking a row toggles that task.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_controller;
use crate::models::Suggestion;
use crate::store::{SuggestionsView, UiStateStoreFields};

#[component]
fn SuggestionRow(task: Suggestion) -> impl IntoView {
    let ctrl = use_controller();
    let id = task.id;
    let energy = format!("{} energy", task.energy_level);

    view! {
        <div
            class="task-item"
            data-task-id=id.to_string()
            style="border-bottom: 1px solid var(--color-border-soft);"
            on:click=move |_| actions::toggle_task(ctrl, id)
        >
            <div class="task-checkbox"></div>
            <div class="task-content">
                <div class="task-title">{task.title}</div>
                <div class="task-meta">
                    <span class=format!("task-priority {}", task.priority)>{task.priority.clone()}</span>
                    <span class=format!("task-energy {}", task.energy_level)>{energy}</span>
                    {task.project_name.map(|name| view! { <span>{name}</span> })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuggestionsPanel() -> impl IntoView {
    let ctrl = use_controller();
    let open = move || ctrl.store.suggestions_open().get();

    view! {
        <div id="smart-suggestions" class="suggestions-panel" class:hidden=move || !open()>
            <div class="suggestions-header">
                <h3>"Smart Suggestions"</h3>
                <button type="button" class="modal-close" on:click=move |_| actions::toggle_suggestions(ctrl, Some(false))>
                    "×"
                </button>
            </div>
            <div id="suggestions-content">
                {move || match ctrl.store.suggestions().get() {
                    SuggestionsView::Loading => view! {
                        <div class="loading">"Finding your next best move..."</div>
                    }.into_any(),
                    state if state.is_all_caught_up() => view! {
                        <div style="text-align: center; padding: var(--space-lg); color: var(--color-text-muted);">
                            <div>"All caught up!"</div>
                        </div>
                    }.into_any(),
                    SuggestionsView::Ready(list) => list
                        .into_iter()
                        .map(|task| view! { <SuggestionRow task=task /> })
                        .collect_view()
                        .into_any(),
                    SuggestionsView::Idle => view! { <div></div> }.into_any(),
                    SuggestionsView::Failed => view! {
                        <div style="text-align: center; padding: var(--space-lg); color: var(--color-urgent);">
                            "Error loading suggestions"
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
