mod note;
mod project;
mod task;

use axum::{response::IntoResponse, Json};

use crate::models::ServiceStatus;

pub use note::*;
pub use project::*;
pub use task::*;

// ============================================================
// Service status
// ============================================================

pub async fn service_status() -> impl IntoResponse {
    Json(ServiceStatus::ok())
}
