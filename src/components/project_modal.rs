//! New Project Modal
//!
//! Name, description and a color swatch. Swatch labels keep the `color{n}`
//! radio ids so template styles and `selectColor` keep working.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_controller;
use crate::forms::{FormKind, PROJECT_COLORS};
use crate::store::UiStateStoreFields;

use super::fields::{TextAreaField, TextField};
use super::is_backdrop_click;

const SELECTED_BORDER: &str = "3px solid var(--color-text)";
const UNSELECTED_BORDER: &str = "3px solid transparent";

#[component]
fn ColorSwatch(index: usize, color: &'static str) -> impl IntoView {
    let ctrl = use_controller();
    let input_id = format!("color{}", index + 1);
    let selected = move || ctrl.field(FormKind::Project, "color") == color;

    view! {
        <input
            type="radio"
            class="color-radio"
            name="color"
            id=input_id.clone()
            value=color
            prop:checked=selected
            on:change=move |_| ctrl.edit_field(FormKind::Project, "color", color.to_string())
        />
        <label
            for=input_id
            class="color-swatch"
            data-color=color
            style=move || format!(
                "background: {}; border: {};",
                color,
                if selected() { SELECTED_BORDER } else { UNSELECTED_BORDER },
            )
        ></label>
    }
}

#[component]
pub fn ProjectModal() -> impl IntoView {
    let ctrl = use_controller();
    let kind = FormKind::Project;

    view! {
        <div
            id="new-project-modal"
            class="modal-overlay"
            class:hidden=move || !ctrl.store.project_modal_open().get()
            on:click=move |ev| {
                if is_backdrop_click(&ev) {
                    ctrl.close_project_modal();
                }
            }
        >
            <div class="modal">
                <div class="modal-header">
                    <h2>"New Project"</h2>
                    <button type="button" class="modal-close" on:click=move |_| ctrl.close_project_modal()>
                        "×"
                    </button>
                </div>
                <form
                    id="new-project-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        actions::submit_project(ctrl);
                    }
                >
                    <TextField kind=kind name="name" id="project-name" label="Name" placeholder="Project name" />
                    <TextAreaField kind=kind name="description" id="project-description" label="Description" />
                    <div class="form-group">
                        <span class="form-label">"Color"</span>
                        <div class="color-picker">
                            {PROJECT_COLORS.iter().enumerate().map(|(index, &color)| view! {
                                <ColorSwatch index=index color=color />
                            }).collect_view()}
                        </div>
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| ctrl.close_project_modal()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Create Project"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
