use rusqlite::{Connection, OptionalExtension, Row};

use super::{explicit_id, format_date, parse_date, Columns, Database, StoreError, StoreResult};
use crate::models::*;

const ENTITY: &str = "task";

const SELECT_TASKS: &str =
    "SELECT task_id, task_name, task_is_complete, task_duration, task_date, project_id FROM tasks";

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        is_complete: row.get(2)?,
        duration: row.get(3)?,
        date: parse_date(4, row.get(4)?)?,
        project_id: row.get(5)?,
    })
}

fn query_task(conn: &Connection, id: u32) -> rusqlite::Result<Option<Task>> {
    conn.query_row(
        &format!("{} WHERE task_id = ?", SELECT_TASKS),
        [id],
        task_from_row,
    )
    .optional()
}

pub(super) fn query_by_project(conn: &Connection, project_id: u32) -> rusqlite::Result<Vec<Task>> {
    let mut stmt = conn.prepare(&format!(
        "{} WHERE project_id = ? ORDER BY task_id",
        SELECT_TASKS
    ))?;

    let tasks = stmt
        .query_map([project_id], task_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(tasks)
}

impl Database {
    // ============================================================
    // Task operations
    // ============================================================

    pub fn get_all_tasks(&self) -> StoreResult<Vec<Task>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!("{} ORDER BY task_id", SELECT_TASKS))?;

        let tasks = stmt
            .query_map([], task_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    pub fn get_task(&self, id: u32) -> StoreResult<Option<Task>> {
        let conn = self.conn();
        Ok(query_task(&conn, id)?)
    }

    pub fn get_tasks_by_project(&self, project_id: u32) -> StoreResult<Vec<Task>> {
        let conn = self.conn();
        Ok(query_by_project(&conn, project_id)?)
    }

    pub fn create_task(&self, input: CreateTaskInput) -> StoreResult<Task> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let mut columns = Columns::default();
        if let Some(id) = explicit_id(input.id)? {
            columns.push("task_id", id);
        }
        columns.push("task_name", input.name);
        columns.push("task_is_complete", input.is_complete);
        columns.push("task_duration", input.duration);
        columns.push("task_date", format_date(input.date));
        if let Some(project_id) = linked_project(input.project_id) {
            columns.push("project_id", project_id);
        }

        let id = columns.insert(&tx, "tasks")?;
        let task = query_task(&tx, id)?.ok_or(StoreError::NotFound { entity: ENTITY, id })?;
        tx.commit()?;

        tracing::debug!(task_id = id, project_id = ?task.project_id, "Created task");
        Ok(task)
    }

    pub fn update_task(&self, input: UpdateTaskInput) -> StoreResult<Task> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let mut columns = Columns::default();
        if let Some(name) = input.name {
            columns.push("task_name", name);
        }
        if let Some(is_complete) = input.is_complete {
            columns.push("task_is_complete", is_complete);
        }
        if let Some(duration) = input.duration {
            columns.push("task_duration", duration);
        }
        if let Some(date) = input.date {
            columns.push("task_date", format_date(date));
        }
        if let Some(project_id) = linked_project(input.project_id) {
            columns.push("project_id", project_id);
        }
        columns.update(&tx, "tasks", "task_id", input.id)?;

        let task = query_task(&tx, input.id)?.ok_or(StoreError::NotFound {
            entity: ENTITY,
            id: input.id,
        })?;
        tx.commit()?;

        Ok(task)
    }

    pub fn delete_task(&self, id: u32) -> StoreResult<()> {
        let conn = self.conn();
        let rows = conn.execute("DELETE FROM tasks WHERE task_id = ?", [id])?;
        if rows == 0 {
            return Err(StoreError::NotFound { entity: ENTITY, id });
        }

        tracing::debug!(task_id = id, "Deleted task");
        Ok(())
    }
}
