use serde::{Deserialize, Serialize};

use super::{Note, Task};

/// A project grouping tasks and notes.
///
/// Projects are the aggregate root for display purposes: reading a project
/// returns the tasks and notes that reference it. Children are still stored
/// and addressed independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "project_id")]
    pub id: u32,
    #[serde(rename = "project_name")]
    pub name: String,
    #[serde(rename = "project_description")]
    pub description: String,
    #[serde(rename = "project_tasks", default)]
    pub tasks: Vec<Task>,
    #[serde(rename = "project_notes", default)]
    pub notes: Vec<Note>,
}

/// Input for creating a new project.
///
/// Nested tasks and notes are never inserted through this input; they are
/// created separately with their `project_id` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectInput {
    /// Explicit identifier. Absent or zero lets the store assign one.
    #[serde(rename = "project_id", default)]
    pub id: Option<u32>,
    #[serde(rename = "project_name")]
    pub name: String,
    #[serde(rename = "project_description", default)]
    pub description: String,
}

/// Input for updating an existing project. Only supplied fields change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProjectInput {
    #[serde(rename = "project_id")]
    pub id: u32,
    #[serde(rename = "project_name", default)]
    pub name: Option<String>,
    #[serde(rename = "project_description", default)]
    pub description: Option<String>,
}
