//! Entry use cases: add, list, show, edit, delete

use crate::domain::{Entry, Journal};
use crate::error::{EdenError, Result};
use crate::infrastructure::EntryRepository;
use chrono::{DateTime, Utc};

/// Service for working with entries
pub struct EntryService<'a, R: EntryRepository> {
    repository: &'a R,
}

impl<'a, R: EntryRepository> EntryService<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        EntryService { repository }
    }

    /// Add an entry, creating the named journal if it does not exist yet
    pub fn add(&self, content: &str, journal: Option<&str>, at: DateTime<Utc>) -> Result<Entry> {
        let mut entry = Entry::new(content, at);

        if let Some(name) = journal {
            let journal = match self.repository.journal_by_name(name)? {
                Some(existing) => existing,
                None => self.repository.create_journal(Journal::new(name))?,
            };
            entry = entry.in_journal(journal.id);
        }

        self.repository.create(entry)
    }

    /// All entries, or only those belonging to the named journal
    pub fn list(&self, journal: Option<&str>) -> Result<Vec<Entry>> {
        let entries = self.repository.all()?;

        match journal {
            None => Ok(entries),
            Some(name) => {
                let journal = self
                    .repository
                    .journal_by_name(name)?
                    .ok_or_else(|| EdenError::InvalidArgument(format!("unknown journal: {}", name)))?;

                Ok(entries
                    .into_iter()
                    .filter(|e| e.journal == Some(journal.id))
                    .collect())
            }
        }
    }

    pub fn show(&self, id: i64) -> Result<Entry> {
        self.repository.get_by_id(id)
    }

    /// Replace the content of an entry and return the stored result
    pub fn edit(&self, id: i64, content: &str) -> Result<Entry> {
        let revised = Entry {
            id,
            content: content.to_string(),
            ..Entry::default()
        };
        self.repository.update(id, revised)?;
        self.repository.get_by_id(id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id)
    }
}
