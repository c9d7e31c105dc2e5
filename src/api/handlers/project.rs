use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{ApiError, JsonBody};
use crate::db::Database;
use crate::models::*;

const ENTITY: &str = "project";

pub async fn list_projects(State(db): State<Database>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(db.get_all_projects()?))
}

pub async fn get_project(
    State(db): State<Database>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Project>, ApiError> {
    let Path(id) = id?;
    db.get_project(id)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY, id))
}

/// Creates a project. Nested tasks and notes in the body are ignored.
pub async fn create_project(
    State(db): State<Database>,
    JsonBody(input): JsonBody<CreateProjectInput>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = db.create_project(input)?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update_project(
    State(db): State<Database>,
    JsonBody(input): JsonBody<UpdateProjectInput>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(db.update_project(input)?))
}

/// Deletes a project and returns it as it was before deletion.
pub async fn delete_project(
    State(db): State<Database>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Project>, ApiError> {
    let Path(id) = id?;
    let project = db
        .get_project(id)?
        .ok_or_else(|| ApiError::not_found(ENTITY, id))?;

    db.delete_project(id)?;
    Ok(Json(project))
}

pub async fn list_project_tasks(
    State(db): State<Database>,
    project_id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let Path(project_id) = project_id?;
    Ok(Json(db.get_tasks_by_project(project_id)?))
}

pub async fn list_project_notes(
    State(db): State<Database>,
    project_id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let Path(project_id) = project_id?;
    Ok(Json(db.get_notes_by_project(project_id)?))
}
