//! Page DOM Helpers
//!
//! Reads and writes the server-rendered part of the page: task rows, project
//! cards, data islands, navigation.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::api::TaskToggle;
use crate::models::Project;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Text of a `<script type="application/json" id=...>` data island
pub fn data_island(id: &str) -> Option<String> {
    document()?
        .get_element_by_id(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Project cards rendered with `data-project-id`
pub fn scrape_project_cards() -> Vec<Project> {
    query_all(".project-card[data-project-id]")
        .into_iter()
        .filter_map(|card| {
            let id = card.get_attribute("data-project-id")?;
            let name = card
                .query_selector(".project-title")
                .ok()
                .flatten()
                .and_then(|title| title.text_content())
                .map(|text| text.trim().to_string())
                .unwrap_or_default();
            let color = card
                .dyn_ref::<HtmlElement>()
                .and_then(|el| el.style().get_property_value("--project-color").ok());
            Some(Project::new(id, name, color.as_deref()))
        })
        .collect()
}

/// First element carrying `data-task-id="{id}"`, with its checkbox
pub fn task_row(task_id: u32) -> Option<(HtmlElement, Element)> {
    let doc = document()?;
    let row = doc
        .query_selector(&format!("[data-task-id=\"{}\"]", task_id))
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    let checkbox = row.query_selector(".task-checkbox").ok().flatten()?;
    Some((row, checkbox))
}

pub fn is_checked(checkbox: &Element) -> bool {
    checkbox.class_list().contains("checked")
}

/// Mirror a confirmed toggle on the task row
pub fn apply_task_toggle(row: &HtmlElement, checkbox: &Element, toggle: TaskToggle) {
    let classes = checkbox.class_list();
    let _ = match toggle {
        TaskToggle::Complete => classes.add_1("checked"),
        TaskToggle::Uncomplete => classes.remove_1("checked"),
    };
    checkbox.set_text_content(Some(toggle.checkbox_mark()));
    let _ = row.style().set_property("opacity", toggle.item_opacity());
}

/// Recount checked tasks into `#completed-count`
pub fn update_completed_count() {
    let completed = query_all(".task-checkbox.checked").len();
    if let Some(counter) = document().and_then(|doc| doc.get_element_by_id("completed-count")) {
        counter.set_text_content(Some(&completed.to_string()));
    }
}

/// Focus the first input or textarea inside the element with `container_id`
pub fn focus_first_field(container_id: &str) {
    let selector = format!("#{id} input, #{id} textarea", id = container_id);
    let field = document()
        .and_then(|doc| doc.query_selector(&selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match field {
        Some(field) => {
            let _ = field.focus();
        }
        None => tracing::debug!(container = container_id, "no field to focus"),
    }
}

pub fn focus_by_id(id: &str) {
    if let Some(el) = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Toggle the body class that enables keyboard focus rings
pub fn set_keyboard_navigation(enabled: bool) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = if enabled {
        classes.add_1("keyboard-navigation")
    } else {
        classes.remove_1("keyboard-navigation")
    };
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(error) = window.location().reload() {
            tracing::error!(?error, "page reload failed");
        }
    }
}

pub fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(error) = window.location().set_href(url) {
            tracing::error!(?error, %url, "navigation failed");
        }
    }
}

/// Browser confirm dialog; false when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
