//! Project Selector
//!
//! "No Project" followed by the page's projects. The selection itself lives in
//! the form's `project_id` field and is reconciled when the list changes.

use leptos::prelude::*;

use crate::context::use_controller;
use crate::forms::FormKind;
use crate::store::UiStateStoreFields;

#[component]
pub fn ProjectSelect(kind: FormKind, id: &'static str) -> impl IntoView {
    let ctrl = use_controller();
    let selected = move || ctrl.field(kind, "project_id");

    view! {
        <div class="form-group">
            <label for=id>"Project"</label>
            <select
                id=id
                name="project_id"
                prop:value=selected
                on:change=move |ev| ctrl.edit_field(kind, "project_id", event_target_value(&ev))
            >
                <option value="" prop:selected=move || selected().is_empty()>"No Project"</option>
                <For
                    each=move || ctrl.store.projects().get()
                    key=|project| project.id.clone()
                    children=move |project| {
                        let project_id = project.id.clone();
                        view! {
                            <option value=project.id prop:selected=move || selected() == project_id>
                                {project.name}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
