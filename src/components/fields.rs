//! Form Field Components
//!
//! Inputs bound to one entry of a form's field map. Every edit goes through
//! the controller so it is also picked up by the draft autosave.

use leptos::prelude::*;

use crate::context::use_controller;
use crate::forms::FormKind;

/// Single-line input
#[component]
pub fn TextField(
    kind: FormKind,
    name: &'static str,
    id: &'static str,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let ctrl = use_controller();

    view! {
        <div class="form-group">
            {label.map(|text| view! { <label for=id>{text}</label> })}
            <input
                type=input_type
                id=id
                name=name
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || ctrl.field(kind, name)
                on:input=move |ev| ctrl.edit_field(kind, name, event_target_value(&ev))
            />
        </div>
    }
}

/// Multi-line input
#[component]
pub fn TextAreaField(
    kind: FormKind,
    name: &'static str,
    id: &'static str,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    let ctrl = use_controller();

    view! {
        <div class="form-group">
            {label.map(|text| view! { <label for=id>{text}</label> })}
            <textarea
                id=id
                name=name
                placeholder=placeholder
                rows=rows.to_string()
                prop:value=move || ctrl.field(kind, name)
                on:input=move |ev| ctrl.edit_field(kind, name, event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Fixed-choice dropdown
#[component]
pub fn SelectField(
    kind: FormKind,
    name: &'static str,
    id: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let ctrl = use_controller();

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                name=name
                prop:value=move || ctrl.field(kind, name)
                on:change=move |ev| ctrl.edit_field(kind, name, event_target_value(&ev))
            >
                {options.iter().map(|&(value, text)| view! {
                    <option value=value prop:selected=move || ctrl.field(kind, name) == value>
                        {text}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
