//! Quick Capture Forms
//!
//! One form per capture tab. Ids and field names match what the server
//! templates and stylesheets expect.

use leptos::prelude::*;

use crate::actions;
use crate::capture::CaptureTab;
use crate::context::use_controller;
use crate::forms::FormKind;

use super::fields::{SelectField, TextAreaField, TextField};
use super::project_select::ProjectSelect;

const PRIORITIES: &[(&str, &str)] = &[("low", "Low"), ("medium", "Medium"), ("high", "High"), ("urgent", "Urgent")];

const ENERGY_LEVELS: &[(&str, &str)] = &[("low", "Low energy"), ("medium", "Medium energy"), ("high", "High energy")];

/// Form wrapper that submits through the tab's capture action
#[component]
fn CaptureForm(tab: CaptureTab, submit_label: &'static str, children: Children) -> impl IntoView {
    let ctrl = use_controller();
    let form_id = FormKind::from(tab).form_id();

    view! {
        <form
            id=form_id
            class="quick-form"
            on:submit=move |ev| {
                ev.prevent_default();
                actions::submit_tab(ctrl, tab);
            }
        >
            {children()}
            <div class="form-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| ctrl.close_quick_capture()>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary">{submit_label}</button>
            </div>
        </form>
    }
}

#[component]
pub fn TaskForm() -> impl IntoView {
    let kind = FormKind::Task;
    view! {
        <CaptureForm tab=CaptureTab::Task submit_label="Add Task">
            <TextField kind=kind name="title" id="task-title" placeholder="What needs to be done?" />
            <TextAreaField kind=kind name="description" id="task-description" placeholder="Details (optional)" rows=2 />
            <div class="form-row">
                <SelectField kind=kind name="priority" id="task-priority" label="Priority" options=PRIORITIES />
                <SelectField kind=kind name="energy_level" id="task-energy" label="Energy" options=ENERGY_LEVELS />
            </div>
            <div class="form-row">
                <TextField kind=kind name="estimated_time" id="task-estimated-time" label="Estimate" placeholder="e.g. 30 min" />
                <TextField kind=kind name="due_date" id="task-due-date" label="Due" input_type="date" />
            </div>
            <ProjectSelect kind=kind id="task-project" />
        </CaptureForm>
    }
}

#[component]
pub fn IdeaForm() -> impl IntoView {
    let kind = FormKind::Idea;
    view! {
        <CaptureForm tab=CaptureTab::Idea submit_label="Capture Idea">
            <TextField kind=kind name="title" id="idea-title" placeholder="What's the idea?" />
            <TextAreaField kind=kind name="description" id="idea-description" placeholder="Flesh it out (optional)" />
            <ProjectSelect kind=kind id="idea-project" />
        </CaptureForm>
    }
}

#[component]
pub fn LinkForm() -> impl IntoView {
    let kind = FormKind::Link;
    view! {
        <CaptureForm tab=CaptureTab::Link submit_label="Save Link">
            <TextField kind=kind name="url" id="link-url" input_type="url" placeholder="https://" />
            <TextField kind=kind name="title" id="link-title" placeholder="Title (optional)" />
            <TextAreaField kind=kind name="description" id="link-description" placeholder="Why is it worth reading?" rows=2 />
            <ProjectSelect kind=kind id="link-project" />
        </CaptureForm>
    }
}

#[component]
pub fn NoteForm() -> impl IntoView {
    let kind = FormKind::Note;
    view! {
        <CaptureForm tab=CaptureTab::Note submit_label="Save Note">
            <TextField kind=kind name="title" id="note-title" placeholder="Title (optional)" />
            <TextAreaField kind=kind name="content" id="note-content" placeholder="Write it down..." rows=6 />
            <ProjectSelect kind=kind id="note-project" />
        </CaptureForm>
    }
}
