use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use contact_book::config::paths::DATA_DIR_ENV;
use contact_book::config::{ContactsPaths, Settings};
use contact_book::models::AddressBook;
use contact_book::shell::Shell;
use contact_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal contact manager with birthday reminders",
    long_about = "Keeps names, phone numbers and birthdays in a local address book. \
                  Run without a subcommand to start the interactive shell."
)]
struct Cli {
    /// Directory holding settings, contacts and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent entries from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    // stdout belongs to the shell; diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ContactsPaths::with_base_dir(dir),
        None => ContactsPaths::new()?,
    };
    // The shell must start even when the settings file is unreadable
    let interactive = matches!(cli.command, None | Some(Commands::Shell));
    let settings = match Settings::load_or_create(&paths) {
        Ok(settings) => settings,
        Err(err) if interactive => {
            warn!(error = %err, "Could not read settings, using defaults");
            Settings::default()
        }
        Err(err) => return Err(err.into()),
    };

    match cli.command {
        None | Some(Commands::Shell) => run_shell(paths, &settings)?,
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized contact book at: {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Contacts file:  {}", paths.contacts_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Birthday window: {} days", settings.birthday_window_days);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Prompt:          {:?}", settings.prompt);
        }
        Some(Commands::Audit { limit }) => {
            let storage = Storage::new(paths, &settings)?;
            match storage.audit() {
                Some(logger) => {
                    let entries = logger.read_recent(limit)?;
                    if entries.is_empty() {
                        println!("No audit entries.");
                    }
                    for entry in entries {
                        println!("{}", entry.format_human_readable());
                    }
                }
                None => println!("Audit logging is disabled."),
            }
        }
    }

    Ok(())
}

fn run_shell(paths: ContactsPaths, settings: &Settings) -> Result<()> {
    let storage = Storage::new(paths, settings)?;

    let book = storage.load().unwrap_or_else(|err| {
        warn!(error = %err, "Could not read address book, starting empty");
        AddressBook::new()
    });

    let mut shell = Shell::new(&storage, settings, book);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(err) = shell.run(stdin.lock(), &mut stdout) {
        error!(error = %err, "Shell stopped with an error");
        return Err(err.into());
    }

    Ok(())
}
