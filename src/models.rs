//! Frontend Models
//!
//! Data structures matching the server's JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Color used when a project card carries no `--project-color`
pub const DEFAULT_PROJECT_COLOR: &str = "#1e40af";

/// Project as known to the client for one page view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default = "default_color", deserialize_with = "color_or_default")]
    pub color: String,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: Option<&str>) -> Self {
        let color = color
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_PROJECT_COLOR);
        Self { id: id.into(), name: name.into(), color: color.to_string() }
    }
}

fn default_color() -> String {
    DEFAULT_PROJECT_COLOR.to_string()
}

fn color_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let color = Option::<String>::deserialize(deserializer)?;
    Ok(color
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(default_color))
}

/// Server ids are integers in the database but strings in form values
fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Parse a project list from a data island or `/api/projects` body
pub fn parse_projects(raw: &str) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// One ranked task from `/api/smart-suggestions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: u32,
    pub title: String,
    pub priority: String,
    pub energy_level: String,
    #[serde(default)]
    pub project_name: Option<String>,
}

/// Body returned by every mutating endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
