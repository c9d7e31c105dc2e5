use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{ApiError, JsonBody};
use crate::db::Database;
use crate::models::*;

const ENTITY: &str = "task";

pub async fn list_tasks(State(db): State<Database>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(db.get_all_tasks()?))
}

pub async fn get_task(
    State(db): State<Database>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id?;
    db.get_task(id)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY, id))
}

pub async fn create_task(
    State(db): State<Database>,
    JsonBody(input): JsonBody<CreateTaskInput>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = db.create_task(input)?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(db): State<Database>,
    JsonBody(input): JsonBody<UpdateTaskInput>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(db.update_task(input)?))
}

pub async fn delete_task(
    State(db): State<Database>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id?;
    let task = db
        .get_task(id)?
        .ok_or_else(|| ApiError::not_found(ENTITY, id))?;

    db.delete_task(id)?;
    Ok(Json(task))
}
