//! Journal entries

use super::timestamp::format_timestamp;
use chrono::{DateTime, Utc};

/// A single dated record of free text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    /// Assigned by the store; zero until the entry has been created
    pub id: i64,
    /// RFC3339 timestamp supplied by the caller
    pub time: String,
    pub content: String,
    /// Owning journal, if any
    pub journal: Option<i64>,
}

impl Entry {
    pub fn new(content: impl Into<String>, time: DateTime<Utc>) -> Self {
        Entry {
            id: 0,
            time: format_timestamp(time),
            content: content.into(),
            journal: None,
        }
    }

    /// Attach this entry to a journal
    pub fn in_journal(mut self, journal_id: i64) -> Self {
        self.journal = Some(journal_id);
        self
    }
}
