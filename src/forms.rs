//! Form Fields and Payloads
//!
//! Every form is a name -> value map. Submitting turns the map into a typed
//! payload, which is where the required-field checks live.

use std::fmt;

use serde::Serialize;

use crate::capture::CaptureTab;
use crate::models::Project;

pub use form_drafts::Fields;

/// Preselected swatch of the new-project form
pub const DEFAULT_SWATCH: &str = "#6366f1";

/// Swatches offered by the new-project form
pub const PROJECT_COLORS: &[&str] = &[
    DEFAULT_SWATCH, "#1e40af", "#059669", "#d97706", "#dc2626", "#db2777", "#7c3aed", "#0891b2",
];

/// Every form the app owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Task,
    Idea,
    Link,
    Note,
    Project,
}

impl FormKind {
    pub const ALL: [FormKind; 5] = [FormKind::Task, FormKind::Idea, FormKind::Link, FormKind::Note, FormKind::Project];

    pub fn form_id(&self) -> &'static str {
        match self {
            FormKind::Task => "quick-task-form",
            FormKind::Idea => "quick-idea-form",
            FormKind::Link => "quick-link-form",
            FormKind::Note => "quick-note-form",
            FormKind::Project => "new-project-form",
        }
    }

    /// Field names with their reset values
    fn default_pairs(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            FormKind::Task => &[
                ("title", ""),
                ("description", ""),
                ("priority", "medium"),
                ("energy_level", "medium"),
                ("estimated_time", ""),
                ("due_date", ""),
                ("project_id", ""),
            ],
            FormKind::Idea => &[("title", ""), ("description", ""), ("project_id", "")],
            FormKind::Link => &[("url", ""), ("title", ""), ("description", ""), ("project_id", "")],
            FormKind::Note => &[("title", ""), ("content", ""), ("project_id", "")],
            FormKind::Project => &[("name", ""), ("description", ""), ("color", DEFAULT_SWATCH)],
        }
    }

    pub fn defaults(&self) -> Fields {
        self.default_pairs()
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    /// Defaults overlaid with a saved draft; names the form doesn't have are ignored
    pub fn restore(&self, draft: &Fields) -> Fields {
        let mut fields = self.defaults();
        for (name, value) in fields.iter_mut() {
            if let Some(saved) = draft.get(name) {
                *value = saved.clone();
            }
        }
        fields
    }

    pub fn has_project_select(&self) -> bool {
        !matches!(self, FormKind::Project)
    }
}

impl From<CaptureTab> for FormKind {
    fn from(tab: CaptureTab) -> Self {
        match tab {
            CaptureTab::Task => FormKind::Task,
            CaptureTab::Idea => FormKind::Idea,
            CaptureTab::Link => FormKind::Link,
            CaptureTab::Note => FormKind::Note,
        }
    }
}

/// Client-side validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingTaskTitle,
    MissingIdeaTitle,
    MissingUrl,
    MissingNoteContent,
    MissingProjectName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::MissingTaskTitle => "Please enter a task title",
            ValidationError::MissingIdeaTitle => "Please enter an idea title",
            ValidationError::MissingUrl => "Please enter a URL",
            ValidationError::MissingNoteContent => "Please enter note content",
            ValidationError::MissingProjectName => "Please enter a project name",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

/// When a successful capture should reload the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadPolicy {
    Always,
    /// Only on a project detail page, where the new entry is listed
    OnProjectPage,
}

impl ReloadPolicy {
    pub fn should_reload(&self, pathname: &str) -> bool {
        match self {
            ReloadPolicy::Always => true,
            ReloadPolicy::OnProjectPage => pathname.contains("/project/"),
        }
    }
}

/// A quick-capture payload posted from one of the modal's tabs
pub trait CapturePayload: Serialize + Sized {
    const TAB: CaptureTab;
    const ENDPOINT: &'static str;
    const SUCCESS_MESSAGE: &'static str;
    const FAILURE_MESSAGE: &'static str;
    const RELOAD: ReloadPolicy = ReloadPolicy::Always;

    fn from_fields(fields: &Fields) -> Result<Self, ValidationError>;
}

fn raw<'a>(fields: &'a Fields, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}

fn trimmed(fields: &Fields, name: &str) -> String {
    raw(fields, name).trim().to_string()
}

/// Empty selector means "No Project"
fn project_id(fields: &Fields) -> Option<String> {
    Some(raw(fields, "project_id"))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub energy_level: String,
    pub estimated_time: String,
    pub due_date: String,
    pub project_id: Option<String>,
}

impl CapturePayload for TaskPayload {
    const TAB: CaptureTab = CaptureTab::Task;
    const ENDPOINT: &'static str = "/api/tasks/quick-add";
    const SUCCESS_MESSAGE: &'static str = "Task added successfully!";
    const FAILURE_MESSAGE: &'static str = "Error adding task";

    fn from_fields(fields: &Fields) -> Result<Self, ValidationError> {
        let title = trimmed(fields, "title");
        if title.is_empty() {
            return Err(ValidationError::MissingTaskTitle);
        }
        Ok(Self {
            title,
            description: trimmed(fields, "description"),
            priority: raw(fields, "priority").to_string(),
            energy_level: raw(fields, "energy_level").to_string(),
            estimated_time: trimmed(fields, "estimated_time"),
            due_date: raw(fields, "due_date").to_string(),
            project_id: project_id(fields),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdeaPayload {
    pub title: String,
    pub description: String,
    pub project_id: Option<String>,
}

impl CapturePayload for IdeaPayload {
    const TAB: CaptureTab = CaptureTab::Idea;
    const ENDPOINT: &'static str = "/api/ideas/quick-add";
    const SUCCESS_MESSAGE: &'static str = "Idea captured!";
    const FAILURE_MESSAGE: &'static str = "Error capturing idea";

    fn from_fields(fields: &Fields) -> Result<Self, ValidationError> {
        let title = trimmed(fields, "title");
        if title.is_empty() {
            return Err(ValidationError::MissingIdeaTitle);
        }
        Ok(Self {
            title,
            description: trimmed(fields, "description"),
            project_id: project_id(fields),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkPayload {
    pub url: String,
    pub title: String,
    pub description: String,
    pub project_id: Option<String>,
}

impl CapturePayload for LinkPayload {
    const TAB: CaptureTab = CaptureTab::Link;
    const ENDPOINT: &'static str = "/api/links/quick-add";
    const SUCCESS_MESSAGE: &'static str = "Link saved to backburner!";
    const FAILURE_MESSAGE: &'static str = "Error saving link";

    fn from_fields(fields: &Fields) -> Result<Self, ValidationError> {
        let url = trimmed(fields, "url");
        if url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        Ok(Self {
            url,
            title: trimmed(fields, "title"),
            description: trimmed(fields, "description"),
            project_id: project_id(fields),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    pub project_id: Option<String>,
}

impl CapturePayload for NotePayload {
    const TAB: CaptureTab = CaptureTab::Note;
    const ENDPOINT: &'static str = "/api/notes/quick-add";
    const SUCCESS_MESSAGE: &'static str = "Note saved!";
    const FAILURE_MESSAGE: &'static str = "Error saving note";
    const RELOAD: ReloadPolicy = ReloadPolicy::OnProjectPage;

    fn from_fields(fields: &Fields) -> Result<Self, ValidationError> {
        let content = trimmed(fields, "content");
        if content.is_empty() {
            return Err(ValidationError::MissingNoteContent);
        }
        Ok(Self {
            title: trimmed(fields, "title"),
            content,
            project_id: project_id(fields),
        })
    }
}

/// Body of `POST /api/projects`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
    pub color: String,
}

impl ProjectPayload {
    pub fn from_fields(fields: &Fields) -> Result<Self, ValidationError> {
        let name = trimmed(fields, "name");
        if name.is_empty() {
            return Err(ValidationError::MissingProjectName);
        }
        let color = Some(trimmed(fields, "color"))
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_SWATCH.to_string());
        Ok(Self { name, description: trimmed(fields, "description"), color })
    }
}

/// Keep a project selection only if the project still exists
pub fn reconcile_project_selection(current: &str, projects: &[Project]) -> String {
    if projects.iter().any(|p| p.id == current) {
        current.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(kind: FormKind, pairs: &[(&str, &str)]) -> Fields {
        let mut fields = kind.defaults();
        for (name, value) in pairs {
            fields.insert(name.to_string(), value.to_string());
        }
        fields
    }

    #[test]
    fn test_task_requires_title() {
        let f = fields(FormKind::Task, &[("title", "   "), ("description", "details")]);
        assert_eq!(TaskPayload::from_fields(&f), Err(ValidationError::MissingTaskTitle));
        assert_eq!(ValidationError::MissingTaskTitle.to_string(), "Please enter a task title");
    }

    #[test]
    fn test_task_payload_trims_and_nulls_empty_project() {
        let f = fields(
            FormKind::Task,
            &[("title", "  Write report "), ("description", " draft\n"), ("estimated_time", " 30m "), ("due_date", "2026-10-20")],
        );
        let payload = TaskPayload::from_fields(&f).unwrap();

        assert_eq!(payload.title, "Write report");
        assert_eq!(payload.description, "draft");
        assert_eq!(payload.estimated_time, "30m");
        assert_eq!(payload.priority, "medium");
        assert_eq!(payload.project_id, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["project_id"], serde_json::Value::Null);
        assert_eq!(json["energy_level"], "medium");
        assert_eq!(json["due_date"], "2026-10-20");
    }

    #[test]
    fn test_selected_project_is_sent_as_is() {
        let f = fields(FormKind::Idea, &[("title", "Garden beds"), ("project_id", "4")]);
        let payload = IdeaPayload::from_fields(&f).unwrap();
        assert_eq!(payload.project_id.as_deref(), Some("4"));
    }

    #[test]
    fn test_each_form_checks_its_own_required_field() {
        assert_eq!(
            IdeaPayload::from_fields(&fields(FormKind::Idea, &[("description", "x")])),
            Err(ValidationError::MissingIdeaTitle)
        );
        assert_eq!(
            LinkPayload::from_fields(&fields(FormKind::Link, &[("title", "Docs")])),
            Err(ValidationError::MissingUrl)
        );
        assert_eq!(
            NotePayload::from_fields(&fields(FormKind::Note, &[("title", "Only a title")])),
            Err(ValidationError::MissingNoteContent)
        );
        assert!(NotePayload::from_fields(&fields(FormKind::Note, &[("content", "body")])).is_ok());
    }

    #[test]
    fn test_note_reloads_only_on_project_pages() {
        assert!(NotePayload::RELOAD.should_reload("/project/3"));
        assert!(!NotePayload::RELOAD.should_reload("/"));
        assert!(TaskPayload::RELOAD.should_reload("/"));
    }

    #[test]
    fn test_restore_ignores_unknown_names() {
        let mut draft = Fields::new();
        draft.insert("title".into(), "saved".into());
        draft.insert("bogus".into(), "x".into());

        let restored = FormKind::Idea.restore(&draft);
        assert_eq!(restored.get("title").map(String::as_str), Some("saved"));
        assert!(!restored.contains_key("bogus"));
        assert_eq!(restored.len(), FormKind::Idea.defaults().len());
    }

    #[test]
    fn test_project_payload_defaults_color() {
        let f = fields(FormKind::Project, &[("name", " Thesis "), ("color", "")]);
        let payload = ProjectPayload::from_fields(&f).unwrap();
        assert_eq!(payload.name, "Thesis");
        assert_eq!(payload.color, DEFAULT_SWATCH);
        assert_eq!(PROJECT_COLORS[0], DEFAULT_SWATCH);
        assert_eq!(
            ProjectPayload::from_fields(&FormKind::Project.defaults()),
            Err(ValidationError::MissingProjectName)
        );
    }

    #[test]
    fn test_reconcile_project_selection() {
        let projects = vec![Project::new("1", "Home", None), Project::new("2", "Work", None)];
        assert_eq!(reconcile_project_selection("2", &projects), "2");
        assert_eq!(reconcile_project_selection("9", &projects), "");
        assert_eq!(reconcile_project_selection("", &projects), "");
    }
}
