use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated piece of free-text content, optionally attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "note_id")]
    pub id: u32,
    #[serde(rename = "note_name")]
    pub name: String,
    #[serde(rename = "note_content")]
    pub content: String,
    #[serde(rename = "note_date", deserialize_with = "super::date::deserialize")]
    pub date: NaiveDate,
    pub project_id: Option<u32>,
}

/// Input for creating a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteInput {
    #[serde(rename = "note_id", default)]
    pub id: Option<u32>,
    #[serde(rename = "note_name")]
    pub name: String,
    #[serde(rename = "note_content", default)]
    pub content: String,
    #[serde(rename = "note_date", deserialize_with = "super::date::deserialize")]
    pub date: NaiveDate,
    #[serde(default)]
    pub project_id: Option<u32>,
}

/// Input for updating a note. All fields but the id are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteInput {
    #[serde(rename = "note_id")]
    pub id: u32,
    #[serde(rename = "note_name", default)]
    pub name: Option<String>,
    #[serde(rename = "note_content", default)]
    pub content: Option<String>,
    #[serde(
        rename = "note_date",
        default,
        deserialize_with = "super::date::deserialize_option"
    )]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub project_id: Option<u32>,
}
