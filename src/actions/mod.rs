//! User Actions
//!
//! Async flows behind buttons, shortcuts and global entry points. Each one
//! validates, awaits a single request, then reports through a toast.

mod capture;
mod task;
mod suggestions;
mod project;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::dom;

pub use capture::{submit_capture, submit_tab};
pub use task::toggle_task;
pub use suggestions::toggle_suggestions;
pub use project::{delete_project, load_projects, submit_project};

/// Reload the page after `delay_ms` so the server-rendered lists catch up
fn reload_after(delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        dom::reload_page();
    });
}
