//! Activity store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `activities` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `insert` validates the draft before touching SQL.
//! - `list_all` ordering is fully deterministic: `date DESC, id DESC`, so
//!   records sharing a date show the later insert first.
//! - Deleting an absent id is a no-op, not an error.

use crate::db::DbError;
use crate::model::record::{ActivityDraft, ActivityRecord, DraftValidationError, RecordId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RECORD_SELECT_SQL: &str = "SELECT id, steps, date FROM activities";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error taxonomy.
///
/// `Storage` covers every storage-unavailable condition; `InvalidDraft` is
/// the constraint-violation rejection on insert; `InvalidData` flags
/// corrupt persisted rows.
#[derive(Debug)]
pub enum StoreError {
    Storage(DbError),
    InvalidDraft(DraftValidationError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidDraft(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted activity data: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::InvalidDraft(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<DraftValidationError> for StoreError {
    fn from(value: DraftValidationError) -> Self {
        Self::InvalidDraft(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(DbError::Sqlite(value))
    }
}

/// Durable store contract for activity records.
///
/// The list controller is generic over this trait; tests substitute stub
/// implementations to observe call patterns.
pub trait ActivityStore {
    /// Validates and inserts one record, returning the store-assigned id.
    fn insert(&self, draft: &ActivityDraft) -> StoreResult<RecordId>;
    /// Returns every record, most recent date first, ties broken by
    /// descending id. An empty table yields an empty vec, never an error.
    fn list_all(&self) -> StoreResult<Vec<ActivityRecord>>;
    /// Fetches one record by id.
    fn get(&self, id: RecordId) -> StoreResult<Option<ActivityRecord>>;
    /// Removes the record with matching id; no-op when absent.
    fn delete_one(&self, id: RecordId) -> StoreResult<()>;
    /// Removes every record; no-op on an empty table.
    fn delete_all(&self) -> StoreResult<()>;
}

/// SQLite-backed activity store.
pub struct SqliteActivityStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteActivityStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ActivityStore for SqliteActivityStore<'_> {
    fn insert(&self, draft: &ActivityDraft) -> StoreResult<RecordId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO activities (steps, date) VALUES (?1, ?2);",
            params![draft.steps, draft.date],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_all(&self) -> StoreResult<Vec<ActivityRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECORD_SELECT_SQL} ORDER BY date DESC, id DESC;"))?;

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_record_row(row)?);
        }

        Ok(records)
    }

    fn get(&self, id: RecordId) -> StoreResult<Option<ActivityRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECORD_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_record_row(row)?));
        }

        Ok(None)
    }

    fn delete_one(&self, id: RecordId) -> StoreResult<()> {
        // Zero affected rows means the id was already gone; that is the
        // documented idempotent outcome.
        self.conn
            .execute("DELETE FROM activities WHERE id = ?1;", params![id])?;
        Ok(())
    }

    fn delete_all(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM activities;", [])?;
        Ok(())
    }
}

fn parse_record_row(row: &Row<'_>) -> StoreResult<ActivityRecord> {
    let record = ActivityRecord {
        id: row.get("id")?,
        steps: row.get("steps")?,
        date: row.get("date")?,
    };

    if record.steps <= 0 {
        return Err(StoreError::InvalidData(format!(
            "non-positive steps value `{}` in activities.steps for id {}",
            record.steps, record.id
        )));
    }
    if record.date < 0 {
        return Err(StoreError::InvalidData(format!(
            "negative date value `{}` in activities.date for id {}",
            record.date, record.id
        )));
    }

    Ok(record)
}
