use rusqlite::{Connection, OptionalExtension, Row};

use super::{explicit_id, notes, tasks, Columns, Database, StoreError, StoreResult};
use crate::models::*;

const ENTITY: &str = "project";

const SELECT_PROJECTS: &str = "SELECT project_id, project_name, project_description FROM projects";

fn project_from_row(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        tasks: Vec::new(),
        notes: Vec::new(),
    })
}

fn load_children(conn: &Connection, project: &mut Project) -> rusqlite::Result<()> {
    project.tasks = tasks::query_by_project(conn, project.id)?;
    project.notes = notes::query_by_project(conn, project.id)?;
    Ok(())
}

fn query_project(conn: &Connection, id: u32) -> rusqlite::Result<Option<Project>> {
    let project = conn
        .query_row(
            &format!("{} WHERE project_id = ?", SELECT_PROJECTS),
            [id],
            project_from_row,
        )
        .optional()?;

    match project {
        Some(mut project) => {
            load_children(conn, &mut project)?;
            Ok(Some(project))
        }
        None => Ok(None),
    }
}

impl Database {
    // ============================================================
    // Project operations
    // ============================================================

    pub fn get_all_projects(&self) -> StoreResult<Vec<Project>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!("{} ORDER BY project_id", SELECT_PROJECTS))?;

        let mut projects = stmt
            .query_map([], project_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for project in &mut projects {
            load_children(&conn, project)?;
        }

        Ok(projects)
    }

    /// Fetches a project with its tasks and notes, `None` if it does not exist.
    pub fn get_project(&self, id: u32) -> StoreResult<Option<Project>> {
        let conn = self.conn();
        Ok(query_project(&conn, id)?)
    }

    pub fn create_project(&self, input: CreateProjectInput) -> StoreResult<Project> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let mut columns = Columns::default();
        if let Some(id) = explicit_id(input.id)? {
            columns.push("project_id", id);
        }
        columns.push("project_name", input.name);
        columns.push("project_description", input.description);

        let id = columns.insert(&tx, "projects")?;
        let project = query_project(&tx, id)?.ok_or(StoreError::NotFound { entity: ENTITY, id })?;
        tx.commit()?;

        tracing::debug!(project_id = id, "Created project");
        Ok(project)
    }

    /// Applies the supplied fields and returns the stored project.
    pub fn update_project(&self, input: UpdateProjectInput) -> StoreResult<Project> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let mut columns = Columns::default();
        if let Some(name) = input.name {
            columns.push("project_name", name);
        }
        if let Some(description) = input.description {
            columns.push("project_description", description);
        }
        columns.update(&tx, "projects", "project_id", input.id)?;

        let project = query_project(&tx, input.id)?.ok_or(StoreError::NotFound {
            entity: ENTITY,
            id: input.id,
        })?;
        tx.commit()?;

        Ok(project)
    }

    /// Deletes a project that has no linked tasks or notes.
    pub fn delete_project(&self, id: u32) -> StoreResult<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let children: i64 = tx.query_row(
            "SELECT (SELECT COUNT(*) FROM tasks WHERE project_id = ?1)
                  + (SELECT COUNT(*) FROM notes WHERE project_id = ?1)",
            [id],
            |row| row.get(0),
        )?;
        if children > 0 {
            return Err(StoreError::ProjectInUse(id));
        }

        let rows = tx.execute("DELETE FROM projects WHERE project_id = ?", [id])?;
        if rows == 0 {
            return Err(StoreError::NotFound { entity: ENTITY, id });
        }
        tx.commit()?;

        tracing::debug!(project_id = id, "Deleted project");
        Ok(())
    }
}
