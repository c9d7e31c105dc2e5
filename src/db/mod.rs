mod notes;
mod projects;
mod schema;
mod tasks;

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, ToSql};

/// Failures surfaced by the persistence layer.
///
/// A missing record on a read is not an error (reads return `Option`); these
/// variants cover writes that target a missing record, the project delete
/// guard, and driver failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no {entity} entity with id {id}")]
    NotFound { entity: &'static str, id: u32 },

    #[error("project entity with id {0} still has linked tasks or notes")]
    ProjectInUse(u32),

    #[error("explicit id {0} exceeds the maximum of {max}", max = MAX_EXPLICIT_ID)]
    IdOutOfRange(u32),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Largest identifier a client may supply on create.
///
/// AUTOINCREMENT continues from the highest id ever stored, so explicit ids
/// are kept in the lower half of the `u32` range to leave room for
/// store-assigned ones.
pub const MAX_EXPLICIT_ID: u32 = i32::MAX as u32;

/// Validates a client-supplied id. Zero means "let the store assign one".
fn explicit_id(id: Option<u32>) -> StoreResult<Option<u32>> {
    match id.filter(|&id| id != 0) {
        Some(id) if id > MAX_EXPLICIT_ID => Err(StoreError::IdOutOfRange(id)),
        id => Ok(id),
    }
}

/// Shared handle to the SQLite store.
///
/// Opened once at startup, handed to the router as state and closed with
/// [`Database::close`] on shutdown. Clones share the same connection.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        tracing::info!("Opened database at {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        Self::open(default_path()?)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn();
        schema::run_migrations(&conn)
    }

    /// Closes the underlying connection.
    ///
    /// If other clones of this handle are still alive the connection stays
    /// open until the last one is dropped.
    pub fn close(self) -> Result<()> {
        match Arc::try_unwrap(self.conn) {
            Ok(mutex) => {
                let conn = mutex.into_inner().unwrap_or_else(PoisonError::into_inner);
                conn.close().map_err(|(_, e)| e)?;
                tracing::info!("Database connection closed");
            }
            Err(_) => {
                tracing::warn!("Database handle still shared, connection closes on last drop");
            }
        }
        Ok(())
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

/// Default database location inside the platform data directory.
pub fn default_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "macmahome")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("macmahome.db"))
}

/// Column/value pairs for a single INSERT or UPDATE statement.
///
/// Columns that are not pushed are left out of the statement entirely, so
/// the table default (NULL for parent references) applies on insert and the
/// stored value is kept on update.
#[derive(Default)]
struct Columns {
    names: Vec<&'static str>,
    values: Vec<Box<dyn ToSql>>,
}

impl Columns {
    fn push(&mut self, name: &'static str, value: impl ToSql + 'static) {
        self.names.push(name);
        self.values.push(Box::new(value));
    }

    /// Inserts a row and returns its primary key.
    fn insert(self, conn: &Connection, table: &str) -> rusqlite::Result<u32> {
        let placeholders = vec!["?"; self.names.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            self.names.join(", "),
            placeholders
        );
        let params: Vec<&dyn ToSql> = self.values.iter().map(|v| v.as_ref()).collect();
        conn.execute(&sql, params.as_slice())?;

        let rowid = conn.last_insert_rowid();
        u32::try_from(rowid).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, rowid))
    }

    /// Updates the row keyed by `key`. Returns the number of affected rows,
    /// zero when there was nothing to set.
    fn update(
        self,
        conn: &Connection,
        table: &str,
        key_column: &str,
        key: u32,
    ) -> rusqlite::Result<usize> {
        if self.names.is_empty() {
            return Ok(0);
        }

        let assignments: Vec<String> = self.names.iter().map(|n| format!("{} = ?", n)).collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?",
            table,
            assignments.join(", "),
            key_column
        );
        let mut params: Vec<&dyn ToSql> = self.values.iter().map(|v| v.as_ref()).collect();
        params.push(&key);
        conn.execute(&sql, params.as_slice())
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(idx: usize, s: String) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(&s, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
