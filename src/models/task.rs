use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated unit of work, optionally attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task_id")]
    pub id: u32,
    #[serde(rename = "task_name")]
    pub name: String,
    #[serde(rename = "task_is_complete")]
    pub is_complete: bool,
    /// Duration in minutes.
    #[serde(rename = "task_duration")]
    pub duration: u32,
    #[serde(rename = "task_date", deserialize_with = "super::date::deserialize")]
    pub date: NaiveDate,
    /// Parent project, `None` when the task is unlinked.
    pub project_id: Option<u32>,
}

/// Input for creating a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskInput {
    /// Explicit identifier. Absent or zero lets the store assign one.
    #[serde(rename = "task_id", default)]
    pub id: Option<u32>,
    #[serde(rename = "task_name")]
    pub name: String,
    #[serde(rename = "task_is_complete", default)]
    pub is_complete: bool,
    #[serde(rename = "task_duration", default)]
    pub duration: u32,
    #[serde(rename = "task_date", deserialize_with = "super::date::deserialize")]
    pub date: NaiveDate,
    /// Absent or zero leaves the task unlinked.
    #[serde(default)]
    pub project_id: Option<u32>,
}

/// Input for updating a task. Only supplied fields change; a zero
/// `project_id` is treated as not supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskInput {
    #[serde(rename = "task_id")]
    pub id: u32,
    #[serde(rename = "task_name", default)]
    pub name: Option<String>,
    #[serde(rename = "task_is_complete", default)]
    pub is_complete: Option<bool>,
    #[serde(rename = "task_duration", default)]
    pub duration: Option<u32>,
    #[serde(
        rename = "task_date",
        default,
        deserialize_with = "super::date::deserialize_option"
    )]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub project_id: Option<u32>,
}
