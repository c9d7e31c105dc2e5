use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{ApiError, JsonBody};
use crate::db::Database;
use crate::models::*;

const ENTITY: &str = "note";

pub async fn list_notes(State(db): State<Database>) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(db.get_all_notes()?))
}

pub async fn get_note(
    State(db): State<Database>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(id) = id?;
    db.get_note(id)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ENTITY, id))
}

pub async fn create_note(
    State(db): State<Database>,
    JsonBody(input): JsonBody<CreateNoteInput>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let note = db.create_note(input)?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn update_note(
    State(db): State<Database>,
    JsonBody(input): JsonBody<UpdateNoteInput>,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(db.update_note(input)?))
}

pub async fn delete_note(
    State(db): State<Database>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(id) = id?;
    let note = db
        .get_note(id)?
        .ok_or_else(|| ApiError::not_found(ENTITY, id))?;

    db.delete_note(id)?;
    Ok(Json(note))
}
