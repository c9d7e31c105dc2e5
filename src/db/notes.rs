use rusqlite::{Connection, OptionalExtension, Row};

use super::{explicit_id, format_date, parse_date, Columns, Database, StoreError, StoreResult};
use crate::models::*;

const ENTITY: &str = "note";

const SELECT_NOTES: &str =
    "SELECT note_id, note_name, note_content, note_date, project_id FROM notes";

fn note_from_row(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        name: row.get(1)?,
        content: row.get(2)?,
        date: parse_date(3, row.get(3)?)?,
        project_id: row.get(4)?,
    })
}

fn query_note(conn: &Connection, id: u32) -> rusqlite::Result<Option<Note>> {
    conn.query_row(
        &format!("{} WHERE note_id = ?", SELECT_NOTES),
        [id],
        note_from_row,
    )
    .optional()
}

pub(super) fn query_by_project(conn: &Connection, project_id: u32) -> rusqlite::Result<Vec<Note>> {
    let mut stmt = conn.prepare(&format!(
        "{} WHERE project_id = ? ORDER BY note_id",
        SELECT_NOTES
    ))?;

    let notes = stmt
        .query_map([project_id], note_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(notes)
}

impl Database {
    // ============================================================
    // Note operations
    // ============================================================

    pub fn get_all_notes(&self) -> StoreResult<Vec<Note>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!("{} ORDER BY note_id", SELECT_NOTES))?;

        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(notes)
    }

    pub fn get_note(&self, id: u32) -> StoreResult<Option<Note>> {
        let conn = self.conn();
        Ok(query_note(&conn, id)?)
    }

    pub fn get_notes_by_project(&self, project_id: u32) -> StoreResult<Vec<Note>> {
        let conn = self.conn();
        Ok(query_by_project(&conn, project_id)?)
    }

    pub fn create_note(&self, input: CreateNoteInput) -> StoreResult<Note> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let mut columns = Columns::default();
        if let Some(id) = explicit_id(input.id)? {
            columns.push("note_id", id);
        }
        columns.push("note_name", input.name);
        columns.push("note_content", input.content);
        columns.push("note_date", format_date(input.date));
        if let Some(project_id) = linked_project(input.project_id) {
            columns.push("project_id", project_id);
        }

        let id = columns.insert(&tx, "notes")?;
        let note = query_note(&tx, id)?.ok_or(StoreError::NotFound { entity: ENTITY, id })?;
        tx.commit()?;

        tracing::debug!(note_id = id, project_id = ?note.project_id, "Created note");
        Ok(note)
    }

    pub fn update_note(&self, input: UpdateNoteInput) -> StoreResult<Note> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let mut columns = Columns::default();
        if let Some(name) = input.name {
            columns.push("note_name", name);
        }
        if let Some(content) = input.content {
            columns.push("note_content", content);
        }
        if let Some(date) = input.date {
            columns.push("note_date", format_date(date));
        }
        if let Some(project_id) = linked_project(input.project_id) {
            columns.push("project_id", project_id);
        }
        columns.update(&tx, "notes", "note_id", input.id)?;

        let note = query_note(&tx, input.id)?.ok_or(StoreError::NotFound {
            entity: ENTITY,
            id: input.id,
        })?;
        tx.commit()?;

        Ok(note)
    }

    pub fn delete_note(&self, id: u32) -> StoreResult<()> {
        let conn = self.conn();
        let rows = conn.execute("DELETE FROM notes WHERE note_id = ?", [id])?;
        if rows == 0 {
            return Err(StoreError::NotFound { entity: ENTITY, id });
        }

        tracing::debug!(note_id = id, "Deleted note");
        Ok(())
    }
}
