//! Application layer - Use cases and orchestration

pub mod entries;
pub mod init;
pub mod journals;
pub mod manage_config;

pub use entries::EntryService;
pub use init::{init, InitOutcome};
pub use journals::JournalService;
pub use manage_config::ConfigService;
