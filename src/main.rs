use chrono::Utc;
use clap::Parser;
use eden::application::{init, ConfigService, EntryService, JournalService};
use eden::cli::{format_entry, format_entry_list, format_journal_list, Cli, Commands, JournalCommands};
use eden::domain::parse_timestamp;
use eden::error::EdenError;
use eden::infrastructure::{
    set_up, Config, ConfigDirProvider, EntryRepository, FixedConfigDir, SqliteRepository,
    SystemConfigDir, DB_FILE_NAME,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run setup and open the migrated database
fn open_store(provider: &dyn ConfigDirProvider) -> Result<(PathBuf, SqliteRepository), EdenError> {
    let app_dir = set_up(provider)?;
    let repo = SqliteRepository::open(&app_dir.join(DB_FILE_NAME))?;
    repo.migrate()?;
    Ok((app_dir, repo))
}

fn join_words(words: &[String]) -> String {
    words.join(" ")
}

fn run(cli: Cli) -> Result<(), EdenError> {
    let provider: Box<dyn ConfigDirProvider> = match cli.config_dir {
        Some(path) => Box::new(FixedConfigDir::new(path)),
        None => Box::new(SystemConfigDir),
    };

    let Some(command) = cli.command else {
        println!("eden - Personal journaling utility");
        println!("Use --help for usage information");
        return Ok(());
    };

    if let Commands::Init = command {
        let outcome = init(&*provider)?;
        if outcome.created {
            println!("Initialized eden at {}", outcome.app_dir.display());
        } else {
            println!("eden is already set up at {}", outcome.app_dir.display());
        }
        return Ok(());
    }

    let (app_dir, repo) = open_store(&*provider)?;

    match command {
        Commands::Init => Ok(()),
        Commands::Add {
            content,
            journal,
            at,
        } => {
            let at = match at {
                Some(value) => parse_timestamp(&value)?,
                None => Utc::now(),
            };
            let journal = match journal {
                Some(name) => Some(name),
                None => Config::load_from_dir(&app_dir)?.default_journal,
            };

            let service = EntryService::new(&repo);
            let entry = service.add(&join_words(&content), journal.as_deref(), at)?;
            println!("Added entry {}", entry.id);
            Ok(())
        }
        Commands::List { journal } => {
            let service = EntryService::new(&repo);
            let entries = service.list(journal.as_deref())?;
            let journals = repo.journals()?;
            let output = format_entry_list(&entries, &journals);
            if entries.is_empty() {
                println!("{}", output);
            } else {
                print!("{}", output);
            }
            Ok(())
        }
        Commands::Show { id } => {
            let entry = EntryService::new(&repo).show(id)?;
            println!("{}", format_entry(&entry, &repo.journals()?));
            Ok(())
        }
        Commands::Edit { id, content } => {
            let entry = EntryService::new(&repo).edit(id, &join_words(&content))?;
            println!("{}", format_entry(&entry, &repo.journals()?));
            Ok(())
        }
        Commands::Delete { id } => {
            EntryService::new(&repo).delete(id)?;
            println!("Deleted entry {}", id);
            Ok(())
        }
        Commands::Journal { command } => {
            let service = JournalService::new(&repo);
            match command {
                JournalCommands::New { name } => {
                    let journal = service.create(&name)?;
                    println!("Created journal {} ({})", journal.name, journal.id);
                }
                JournalCommands::List => {
                    let journals = service.list()?;
                    if journals.is_empty() {
                        println!("{}", format_journal_list(&journals));
                    } else {
                        print!("{}", format_journal_list(&journals));
                    }
                }
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(app_dir);

            if list {
                let config = service.list()?;
                println!(
                    "default_journal = {}",
                    config.default_journal.unwrap_or_default()
                );
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: eden config [--list | <key> [<value>]]");
                println!("Valid keys: default_journal");
                Ok(())
            }
        }
    }
}
