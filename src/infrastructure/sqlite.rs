//! SQLite implementation of the entry repository

use crate::domain::{Entry, Journal};
use crate::error::{EdenError, Result};
use crate::infrastructure::EntryRepository;
use rusqlite::{ffi, params, Connection, ErrorCode, OptionalExtension, Row};
use std::path::Path;
use tracing::{debug, info};

// Journal references are advisory: no FOREIGN KEY, nothing cascades.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS journals(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE IF NOT EXISTS entries(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        time TEXT NOT NULL,
        content TEXT NOT NULL,
        journal_id INTEGER
    );
"#;

/// Repository backed by a single SQLite connection
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Wrap an already opened connection
    pub fn new(conn: Connection) -> Self {
        SqliteRepository { conn }
    }

    /// Open (or create) the database file at `path`. Does not migrate.
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)?;
        Ok(Self::new(conn))
    }

    /// Open a private in-memory database. Does not migrate.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::new(conn))
    }
}

/// Map an engine error onto the error taxonomy.
///
/// Uniqueness violations become `DuplicateRecord`; anything else is passed
/// through as `Storage`.
pub fn classify(err: rusqlite::Error) -> EdenError {
    if is_unique_violation(&err) {
        EdenError::DuplicateRecord
    } else {
        EdenError::Storage(err)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && (e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                    || e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
        }
        _ => false,
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        time: row.get(1)?,
        content: row.get(2)?,
        journal: row.get(3)?,
    })
}

fn journal_from_row(row: &Row<'_>) -> rusqlite::Result<Journal> {
    Ok(Journal {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn ensure_valid_id(id: i64) -> Result<()> {
    if id <= 0 {
        return Err(EdenError::InvalidArgument(format!("invalid entry id: {}", id)));
    }
    Ok(())
}

impl EntryRepository for SqliteRepository {
    fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        debug!("schema migrated");
        Ok(())
    }

    fn create_journal(&self, mut journal: Journal) -> Result<Journal> {
        self.conn
            .execute("INSERT INTO journals(name) VALUES (?1)", params![journal.name])
            .map_err(classify)?;

        journal.id = self.conn.last_insert_rowid();
        info!(id = journal.id, name = %journal.name, "created journal");
        Ok(journal)
    }

    fn journals(&self) -> Result<Vec<Journal>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM journals ORDER BY id")?;

        let journals = stmt
            .query_map([], journal_from_row)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(journals)
    }

    fn journal_by_name(&self, name: &str) -> Result<Option<Journal>> {
        let journal = self
            .conn
            .query_row(
                "SELECT id, name FROM journals WHERE name = ?1",
                [name],
                journal_from_row,
            )
            .optional()?;

        Ok(journal)
    }

    fn create(&self, mut entry: Entry) -> Result<Entry> {
        self.conn
            .execute(
                "INSERT INTO entries(content, time, journal_id) VALUES (?1, ?2, ?3)",
                params![entry.content, entry.time, entry.journal],
            )
            .map_err(classify)?;

        entry.id = self.conn.last_insert_rowid();
        info!(id = entry.id, "created entry");
        Ok(entry)
    }

    fn all(&self) -> Result<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, time, content, journal_id FROM entries ORDER BY id")?;

        let entries = stmt
            .query_map([], entry_from_row)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(entries)
    }

    fn get_by_id(&self, id: i64) -> Result<Entry> {
        self.conn
            .query_row(
                "SELECT id, time, content, journal_id FROM entries WHERE id = ?1",
                [id],
                entry_from_row,
            )
            .optional()?
            .ok_or(EdenError::NotExists)
    }

    fn update(&self, id: i64, mut updated: Entry) -> Result<Entry> {
        ensure_valid_id(id)?;

        let rows = self.conn.execute(
            "UPDATE entries SET content = ?1 WHERE id = ?2",
            params![updated.content, id],
        )?;

        if rows == 0 {
            return Err(EdenError::UpdateFailed);
        }

        info!(id, "updated entry");
        updated.id = id;
        Ok(updated)
    }

    fn delete(&self, id: i64) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1", [id])?;

        if rows == 0 {
            return Err(EdenError::DeleteFailed);
        }

        info!(id, "deleted entry");
        Ok(())
    }
}
