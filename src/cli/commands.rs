//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eden")]
#[command(about = "Personal journaling utility", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Use this directory instead of the platform config directory
    #[arg(long, global = true, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the config directory and database
    Init,

    /// Add a new entry
    Add {
        /// Entry text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,

        /// Journal to file the entry under (created if missing)
        #[arg(short, long)]
        journal: Option<String>,

        /// Entry time as RFC3339 (default: now)
        #[arg(long, value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// List entries
    List {
        /// Only show entries from this journal
        #[arg(short, long)]
        journal: Option<String>,
    },

    /// Show a single entry
    Show { id: i64 },

    /// Replace the content of an entry
    Edit {
        id: i64,

        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Delete an entry
    Delete { id: i64 },

    /// Manage journals
    Journal {
        #[command(subcommand)]
        command: JournalCommands,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum JournalCommands {
    /// Create a journal
    New { name: String },

    /// List journals
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["eden", "add", "Smash", "it!", "--journal", "Work"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                content, journal, at,
            }) => {
                assert_eq!(content, vec!["Smash", "it!"]);
                assert_eq!(journal.as_deref(), Some("Work"));
                assert_eq!(at, None);
            }
            other => panic!("Expected add, got {:?}", other),
        }
    }

    #[test]
    fn test_add_requires_content() {
        assert!(Cli::try_parse_from(["eden", "add"]).is_err());
    }

    #[test]
    fn test_global_config_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["eden", "list", "--config-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }
}
