//! Infrastructure layer - Persistence and file system setup

pub mod config;
pub mod repository;
pub mod setup;
pub mod sqlite;

pub use config::Config;
pub use repository::EntryRepository;
pub use setup::{
    app_config_dir, database_path, set_up, ConfigDirProvider, DbPathChecker, FixedConfigDir,
    SystemConfigDir, APP_DIR_NAME, DB_FILE_NAME,
};
pub use sqlite::SqliteRepository;
