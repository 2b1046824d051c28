//! Window Globals
//!
//! Entry points for inline `onclick=` handlers in the server templates. Each one
//! forwards to the installed `UiController`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::capture::CaptureTab;
use crate::context::UiController;
use crate::forms::NotePayload;
use crate::toast::ToastKind;

/// Task ids arrive as numbers, or as strings from templated attributes
fn task_id(value: &JsValue) -> Option<u32> {
    if let Some(n) = value.as_f64() {
        return (n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX)).then_some(n as u32);
    }
    value.as_string().and_then(|s| s.trim().parse().ok())
}

fn id_string(value: &JsValue) -> Option<String> {
    if let Some(n) = value.as_f64() {
        return Some(format!("{}", n));
    }
    value.as_string().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// A swatch color given directly, or read off a swatch element's `data-color`
fn color_value(value: &JsValue) -> Option<String> {
    if let Some(color) = value.as_string() {
        return Some(color);
    }
    value
        .dyn_ref::<web_sys::Element>()
        .and_then(|el| el.get_attribute("data-color"))
}

fn with_controller(f: impl FnOnce(UiController)) {
    if let Some(ctrl) = UiController::current() {
        f(ctrl);
    }
}

fn expose(name: &str, function: JsValue) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(error) = js_sys::Reflect::set(&window, &JsValue::from_str(name), &function) {
        tracing::error!(name, ?error, "could not expose global");
    }
}

fn expose0(name: &str, f: impl Fn() + 'static) {
    expose(name, Closure::<dyn Fn()>::new(f).into_js_value());
}

fn expose1(name: &str, f: impl Fn(JsValue) + 'static) {
    expose(name, Closure::<dyn Fn(JsValue)>::new(f).into_js_value());
}

fn expose2(name: &str, f: impl Fn(JsValue, JsValue) + 'static) {
    expose(name, Closure::<dyn Fn(JsValue, JsValue)>::new(f).into_js_value());
}

/// Publish every global entry point on `window`
pub fn install() {
    expose1("openQuickCapture", |tab| {
        let tab = match tab.as_string() {
            Some(name) => name.parse().unwrap_or_else(|unknown| {
                tracing::warn!(%unknown, "opening quick capture on the task tab");
                CaptureTab::Task
            }),
            None => CaptureTab::Task,
        };
        with_controller(|ctrl| ctrl.open_quick_capture(tab));
    });
    expose0("closeQuickCapture", || with_controller(|ctrl| ctrl.close_quick_capture()));
    expose1("toggleTask", |id| match task_id(&id) {
        Some(id) => with_controller(|ctrl| actions::toggle_task(ctrl, id)),
        None => tracing::warn!(?id, "toggleTask called without a task id"),
    });
    expose1("toggleSmartSuggestions", |force| {
        with_controller(|ctrl| actions::toggle_suggestions(ctrl, force.as_bool()));
    });
    expose0("createProject", || with_controller(|ctrl| ctrl.open_project_modal()));
    expose0("closeProjectModal", || with_controller(|ctrl| ctrl.close_project_modal()));
    expose1("selectColor", |swatch| match color_value(&swatch) {
        Some(color) => with_controller(|ctrl| ctrl.select_color(&color)),
        None => tracing::warn!("selectColor called without a color"),
    });
    expose2("showToast", |message, kind| {
        let message = message.as_string().unwrap_or_default();
        let kind = kind.as_string().map(|k| ToastKind::parse(&k)).unwrap_or_default();
        with_controller(|ctrl| ctrl.show_toast(message, kind));
    });
    expose0("submitQuickNote", || with_controller(actions::submit_capture::<NotePayload>));
    expose2("deleteProject", |id, name| match id_string(&id) {
        Some(id) => {
            let name = name.as_string().unwrap_or_default();
            with_controller(|ctrl| actions::delete_project(ctrl, id, name));
        }
        None => tracing::warn!(?id, "deleteProject called without a project id"),
    });
    expose1("clearAutoSave", |form_id| match form_id.as_string() {
        Some(form_id) => with_controller(|ctrl| ctrl.clear_draft(&form_id)),
        None => tracing::warn!("clearAutoSave called without a form id"),
    });
}
