use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::database::ContactStore;
use crate::models::CliApp;

#[derive(Parser)]
#[command(
    name = "contact-directory",
    version,
    about = "Contact directory with validated email export"
)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "config.yml")]
    pub config: String,

    /// Path to the SQLite contact database (overrides config.yml)
    #[arg(long, env = "CONTACTS_DB")]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a new contact to the directory
    Add {
        /// Contact name (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// Postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// List contacts, optionally filtered by a search term
    List {
        /// Match against name, email, phone and address
        #[arg(long)]
        search: Option<String>,
    },
    /// Remove a contact by id
    Remove {
        /// Contact id as shown by `list`
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Export validated email addresses to a text file
    Export {
        /// Destination file (defaults to the configured export path)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show contact store statistics
    Stats,
}

impl CliApp {
    pub fn new(config: Config, store: ContactStore) -> Self {
        Self { config, store }
    }
}
