//! Repository abstraction over persisted entries and journals

use crate::domain::{Entry, Journal};
use crate::error::Result;

/// Sole mediator between the application and persisted state
pub trait EntryRepository {
    /// Create the tables if they do not exist yet
    fn migrate(&self) -> Result<()>;

    /// Insert a journal, returning it with its assigned id
    fn create_journal(&self, journal: Journal) -> Result<Journal>;

    /// All journals, ordered by id
    fn journals(&self) -> Result<Vec<Journal>>;

    /// Look up a journal by its exact name
    fn journal_by_name(&self, name: &str) -> Result<Option<Journal>>;

    /// Insert an entry, returning it with its assigned id
    fn create(&self, entry: Entry) -> Result<Entry>;

    /// Every stored entry. Callers must not rely on the order.
    fn all(&self) -> Result<Vec<Entry>>;

    /// Fetch one entry, failing with `NotExists` on a miss
    fn get_by_id(&self, id: i64) -> Result<Entry>;

    /// Replace the content of an entry.
    ///
    /// Returns `updated` with its id set to `id`; storage is not re-read.
    /// A zero-rows-affected update fails with `UpdateFailed`.
    fn update(&self, id: i64, updated: Entry) -> Result<Entry>;

    /// Remove an entry, failing with `DeleteFailed` if nothing matched
    fn delete(&self, id: i64) -> Result<()>;
}
