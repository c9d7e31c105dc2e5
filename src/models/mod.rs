//! Domain models for macmahome.
//!
//! # Entities
//!
//! - [`Project`]: Top-level container. Reads return its tasks and notes nested.
//! - [`Task`]: A dated unit of work with a duration and completion flag.
//! - [`Note`]: Dated free-text content.
//!
//! Tasks and notes may be attached to a project through `project_id`. An
//! absent, `null` or `0` project id means the record is unlinked.

pub(crate) mod date;
mod note;
mod project;
mod status;
mod task;

pub use note::*;
pub use project::*;
pub use status::*;
pub use task::*;

/// Treats a zero parent reference as "no parent".
pub(crate) fn linked_project(project_id: Option<u32>) -> Option<u32> {
    project_id.filter(|&id| id != 0)
}
