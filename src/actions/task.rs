//! Task Completion Toggle

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::api::TaskToggle;
use crate::context::UiController;
use crate::dom;
use crate::toast::ToastKind;

use super::reload_after;

/// Flip a task's completion. The row is only updated once the server agrees;
/// the count refresh and the reload follow on timers.
pub fn toggle_task(ctrl: UiController, task_id: u32) {
    let Some((row, checkbox)) = dom::task_row(task_id) else {
        tracing::warn!(task_id, "no task row to toggle");
        return;
    };
    let toggle = TaskToggle::from_checked(dom::is_checked(&checkbox));

    spawn_local(async move {
        match ctrl.api().toggle_task(task_id, toggle).await {
            Ok(()) => {
                tracing::info!(task_id, ?toggle, "task toggled");
                dom::apply_task_toggle(&row, &checkbox, toggle);
                ctrl.show_toast(toggle.success_message(), ToastKind::Success);

                let config = ctrl.config();
                spawn_local(async move {
                    TimeoutFuture::new(config.count_refresh_delay_ms).await;
                    dom::update_completed_count();
                });
                reload_after(config.reload_delay_ms);
            }
            Err(error) => {
                tracing::error!(task_id, %error, "task toggle failed");
                ctrl.show_toast("Error updating task", ToastKind::Error);
            }
        }
    });
}
