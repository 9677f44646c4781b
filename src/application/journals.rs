//! Journal use cases

use crate::domain::Journal;
use crate::error::Result;
use crate::infrastructure::EntryRepository;

/// Service for creating and listing journals
pub struct JournalService<'a, R: EntryRepository> {
    repository: &'a R,
}

impl<'a, R: EntryRepository> JournalService<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        JournalService { repository }
    }

    pub fn create(&self, name: &str) -> Result<Journal> {
        self.repository.create_journal(Journal::new(name))
    }

    pub fn list(&self) -> Result<Vec<Journal>> {
        self.repository.journals()
    }
}
