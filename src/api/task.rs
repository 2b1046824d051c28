//! Task Endpoints

use super::{ApiClient, ApiResult, Method};

/// Direction of a completion toggle, chosen from the checkbox's current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskToggle {
    Complete,
    Uncomplete,
}

impl TaskToggle {
    /// A checked checkbox means the task is done, so the toggle reopens it
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            TaskToggle::Uncomplete
        } else {
            TaskToggle::Complete
        }
    }

    pub fn path(&self, task_id: u32) -> String {
        match self {
            TaskToggle::Complete => format!("/api/tasks/{}/complete", task_id),
            TaskToggle::Uncomplete => format!("/api/tasks/{}/uncomplete", task_id),
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            TaskToggle::Complete => "Task completed!",
            TaskToggle::Uncomplete => "Task marked incomplete",
        }
    }

    /// Checkbox text after the toggle
    pub fn checkbox_mark(&self) -> &'static str {
        match self {
            TaskToggle::Complete => "✓",
            TaskToggle::Uncomplete => "",
        }
    }

    /// Task row opacity after the toggle
    pub fn item_opacity(&self) -> &'static str {
        match self {
            TaskToggle::Complete => "0.6",
            TaskToggle::Uncomplete => "1",
        }
    }
}

impl ApiClient {
    pub async fn toggle_task(&self, task_id: u32, toggle: TaskToggle) -> ApiResult<()> {
        self.mutate(Method::Post, &toggle.path(task_id), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_task_completes() {
        let toggle = TaskToggle::from_checked(false);
        assert_eq!(toggle, TaskToggle::Complete);
        assert_eq!(toggle.path(12), "/api/tasks/12/complete");
        assert_eq!(toggle.checkbox_mark(), "✓");
        assert_eq!(toggle.item_opacity(), "0.6");
    }

    #[test]
    fn test_checked_task_uncompletes() {
        let toggle = TaskToggle::from_checked(true);
        assert_eq!(toggle, TaskToggle::Uncomplete);
        assert_eq!(toggle.path(12), "/api/tasks/12/uncomplete");
        assert_eq!(toggle.checkbox_mark(), "");
        assert_eq!(toggle.success_message(), "Task marked incomplete");
    }
}
