//! Initialize eden use case

use crate::error::Result;
use crate::infrastructure::{set_up, ConfigDirProvider, DbPathChecker};
use std::path::PathBuf;

/// Outcome of running setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub app_dir: PathBuf,
    /// False if a database was already in place
    pub created: bool,
}

/// Set up the config directory and database for the given provider.
pub fn init<P: ConfigDirProvider + ?Sized>(provider: &P) -> Result<InitOutcome> {
    let existed = DbPathChecker::new(provider).check()?;
    let app_dir = set_up(provider)?;

    Ok(InitOutcome {
        app_dir,
        created: !existed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FixedConfigDir;
    use tempfile::TempDir;

    #[test]
    fn test_init_reports_creation_once() {
        let temp = TempDir::new().unwrap();
        let provider = FixedConfigDir::new(temp.path());

        let first = init(&provider).unwrap();
        assert!(first.created);
        assert_eq!(first.app_dir, temp.path().join("eden"));

        let second = init(&provider).unwrap();
        assert!(!second.created);
        assert_eq!(second.app_dir, first.app_dir);
    }
}
