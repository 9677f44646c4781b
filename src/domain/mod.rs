//! Domain layer - Entries, journals and timestamps

pub mod entry;
pub mod journal;
pub mod timestamp;

pub use entry::Entry;
pub use journal::Journal;
pub use timestamp::{format_timestamp, parse_timestamp};
