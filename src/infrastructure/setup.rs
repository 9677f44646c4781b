//! First-run setup of the per-user configuration directory
//!
//! The platform directory is supplied through [`ConfigDirProvider`] so that
//! callers (and tests) can point eden somewhere other than the real user
//! configuration directory.

use crate::error::{EdenError, Result};
use crate::infrastructure::{EntryRepository, SqliteRepository};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the application directory inside the user config directory
pub const APP_DIR_NAME: &str = "eden";

/// Name of the database file inside the application directory
pub const DB_FILE_NAME: &str = "eden.db";

/// Supplies the platform's user configuration directory
pub trait ConfigDirProvider {
    fn config_dir(&self) -> Result<PathBuf>;
}

/// The real per-user configuration directory (`dirs::config_dir`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemConfigDir;

impl ConfigDirProvider for SystemConfigDir {
    fn config_dir(&self) -> Result<PathBuf> {
        dirs::config_dir().ok_or(EdenError::ConfigDirUnavailable)
    }
}

/// A fixed directory standing in for the user configuration directory
#[derive(Debug, Clone)]
pub struct FixedConfigDir(pub PathBuf);

impl FixedConfigDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FixedConfigDir(path.into())
    }
}

impl ConfigDirProvider for FixedConfigDir {
    fn config_dir(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

impl<T: ConfigDirProvider + ?Sized> ConfigDirProvider for &T {
    fn config_dir(&self) -> Result<PathBuf> {
        (**self).config_dir()
    }
}

impl<T: ConfigDirProvider + ?Sized> ConfigDirProvider for Box<T> {
    fn config_dir(&self) -> Result<PathBuf> {
        (**self).config_dir()
    }
}

/// `<user-config>/eden`
pub fn app_config_dir<P: ConfigDirProvider + ?Sized>(provider: &P) -> Result<PathBuf> {
    Ok(provider.config_dir()?.join(APP_DIR_NAME))
}

/// `<user-config>/eden/eden.db`
pub fn database_path<P: ConfigDirProvider + ?Sized>(provider: &P) -> Result<PathBuf> {
    Ok(app_config_dir(provider)?.join(DB_FILE_NAME))
}

/// Ensure the application directory and a migrated database exist.
///
/// Returns the application directory. Safe to call repeatedly: existing data
/// is left untouched and a missing schema is created.
pub fn set_up<P: ConfigDirProvider + ?Sized>(provider: &P) -> Result<PathBuf> {
    let app_dir = app_config_dir(provider)?;

    if !app_dir.exists() {
        create_private_dir(&app_dir)?;
        info!(path = %app_dir.display(), "created config directory");
    }

    let db_path = app_dir.join(DB_FILE_NAME);
    if !db_path.exists() {
        File::create(&db_path)?;
        info!(path = %db_path.display(), "created database");
    } else {
        debug!(path = %db_path.display(), "database already present");
    }

    // An existing file may predate the schema (e.g. an interrupted first run)
    let repo = SqliteRepository::open(&db_path)?;
    repo.migrate()?;

    Ok(app_dir)
}

fn create_private_dir(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(path)
}

/// Checks whether setup has already produced a database file
pub struct DbPathChecker<P> {
    provider: P,
}

impl<P: ConfigDirProvider> DbPathChecker<P> {
    pub fn new(provider: P) -> Self {
        DbPathChecker { provider }
    }

    /// True if `<user-config>/eden/eden.db` exists
    pub fn check(&self) -> Result<bool> {
        let db_path = database_path(&self.provider)?;
        let exists = db_path.exists();
        if !exists {
            debug!(path = %db_path.display(), "database not found");
        }
        Ok(exists)
    }
}
