//! Server-Rendered Form Drafts
//!
//! Draft autosave for `<form id=...>` elements the server renders (edit forms on
//! detail pages). App-owned forms keep their fields in signals and are handled
//! by the controller instead.

use form_drafts::{Debouncer, DraftStore, Drafts, Fields};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom;

/// Restore drafts into, and start autosaving, every page form not in `owned_ids`
pub fn attach<S>(drafts: &Drafts<S>, delay_ms: u32, owned_ids: &[&str])
where
    S: DraftStore + Clone + 'static,
{
    let Some(list) = dom::document().and_then(|doc| doc.query_selector_all("form").ok()) else {
        return;
    };

    for form in (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlFormElement>().ok())
    {
        let form_id = form.id();
        if form_id.is_empty() || owned_ids.contains(&form_id.as_str()) {
            continue;
        }
        restore(drafts, &form, &form_id);
        watch(drafts.clone(), form, form_id, delay_ms);
    }
}

fn restore<S: DraftStore>(drafts: &Drafts<S>, form: &HtmlFormElement, form_id: &str) {
    match drafts.load(form_id) {
        Ok(Some(fields)) => {
            for (name, value) in &fields {
                let selector = format!("[name=\"{}\"]", name);
                if let Ok(Some(field)) = form.query_selector(&selector) {
                    set_field_value(&field, value);
                }
            }
            tracing::debug!(form = form_id, count = fields.len(), "restored page form draft");
        }
        Ok(None) => {}
        Err(error) => tracing::error!(form = form_id, %error, "error restoring form data"),
    }
}

fn watch<S>(drafts: Drafts<S>, form: HtmlFormElement, form_id: String, delay_ms: u32)
where
    S: DraftStore + Clone + 'static,
{
    let debouncer = Debouncer::new(delay_ms);
    let target = form.clone();
    let on_edit = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let drafts = drafts.clone();
        let form = form.clone();
        let form_id = form_id.clone();
        debouncer.schedule(move || {
            let fields = snapshot(&form);
            if let Err(error) = drafts.save(&form_id, &fields) {
                tracing::error!(form = %form_id, %error, "saving page form draft failed");
            }
        });
    });

    for event in ["input", "change"] {
        if let Err(error) = target.add_event_listener_with_callback(event, on_edit.as_ref().unchecked_ref()) {
            tracing::warn!(?error, event, "could not watch page form");
        }
    }
    // Lives as long as the page
    on_edit.forget();
}

/// Named string entries of a form; file inputs are skipped
fn snapshot(form: &HtmlFormElement) -> Fields {
    let mut fields = Fields::new();
    let Ok(data) = FormData::new_with_form(form) else {
        return fields;
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return fields;
    };
    for entry in entries.flatten() {
        let pair = js_sys::Array::from(&entry);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.insert(name, value);
        }
    }
    fields
}

fn set_field_value(field: &Element, value: &str) {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    }
}
