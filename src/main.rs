//! Focus Frontend Entry Point

mod models;
mod config;
mod capture;
mod forms;
mod toast;
mod store;
mod api;
mod dom;
mod context;
mod actions;
mod page_forms;
mod shortcuts;
mod bindings;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    mount_to_body(App);
}
