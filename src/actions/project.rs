//! Project Actions

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::UiController;
use crate::dom;
use crate::forms::{FormKind, ProjectPayload};
use crate::models::parse_projects;
use crate::toast::ToastKind;

use super::reload_after;

/// Id of the data island carrying the page's projects
pub const PROJECTS_ISLAND_ID: &str = "focus-projects";

/// Build the project list: data island, then project cards, then the API
pub fn load_projects(ctrl: UiController) {
    if let Some(raw) = dom::data_island(PROJECTS_ISLAND_ID) {
        match parse_projects(&raw) {
            Ok(projects) => return ctrl.set_projects(projects),
            Err(error) => tracing::warn!(%error, "malformed projects island"),
        }
    }

    let cards = dom::scrape_project_cards();
    if !cards.is_empty() {
        return ctrl.set_projects(cards);
    }

    spawn_local(async move {
        match ctrl.api().list_projects().await {
            Ok(projects) => ctrl.set_projects(projects),
            Err(error) => tracing::error!(%error, "loading projects failed"),
        }
    });
}

pub fn submit_project(ctrl: UiController) {
    let fields = ctrl.fields(FormKind::Project).get_untracked();
    let payload = match ProjectPayload::from_fields(&fields) {
        Ok(payload) => payload,
        Err(invalid) => {
            ctrl.show_toast(invalid.to_string(), ToastKind::Error);
            return;
        }
    };

    spawn_local(async move {
        match ctrl.api().create_project(&payload).await {
            Ok(()) => {
                tracing::info!(name = %payload.name, "project created");
                ctrl.show_toast("Project created!", ToastKind::Success);
                ctrl.close_project_modal();
                reload_after(ctrl.config().reload_delay_ms);
            }
            Err(error) => {
                tracing::error!(%error, "project creation failed");
                ctrl.show_toast("Error creating project", ToastKind::Error);
            }
        }
    });
}

pub fn delete_confirmation(project_name: &str) -> String {
    format!(
        "Are you sure you want to delete the project \"{}\"?\n\nThis will:\n\
         • Move all tasks, ideas, notes, and links to \"No Project\"\n\
         • This action cannot be undone.",
        project_name
    )
}

/// Confirm, delete, then leave for the home page
pub fn delete_project(ctrl: UiController, project_id: String, project_name: String) {
    if !dom::confirm(&delete_confirmation(&project_name)) {
        return;
    }
    ctrl.show_toast("Deleting project...", ToastKind::Info);

    spawn_local(async move {
        match ctrl.api().delete_project(&project_id).await {
            Ok(()) => {
                tracing::info!(%project_id, "project deleted");
                ctrl.show_toast("Project deleted successfully", ToastKind::Success);
                TimeoutFuture::new(ctrl.config().delete_redirect_ms).await;
                dom::navigate_to("/");
            }
            Err(error) => {
                tracing::error!(%project_id, %error, "project deletion failed");
                let message = error.server_message().unwrap_or("Error deleting project").to_string();
                ctrl.show_toast(message, ToastKind::Error);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_confirmation_names_project_and_consequences() {
        let message = delete_confirmation("Garden");
        assert!(message.starts_with("Are you sure you want to delete the project \"Garden\"?"));
        assert!(message.contains("\"No Project\""));
        assert!(message.ends_with("This action cannot be undone."));
    }
}
