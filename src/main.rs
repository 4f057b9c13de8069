use models::{CliApp, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod database;
mod email_export;
mod models;

use clap::Parser;
use cli::Cli;
use config::{load_config, Config};
use database::ContactStore;
use std::path::Path;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Cli::parse();

    // Load configuration
    let config = match load_config(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", args.config, e);
            Config::default()
        }
    };

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("contact_directory={}", config.logging.level).parse()?),
        )
        .init();

    // Create output directory
    tokio::fs::create_dir_all(&config.export.directory).await?;

    // Initialize the contact store. --database / CONTACTS_DB wins over config.yml.
    let db_path = args
        .database
        .clone()
        .unwrap_or_else(|| config.database.path.clone());
    if let Some(parent) = Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    info!("Opening contact store: {}", db_path);
    let store = ContactStore::open(&db_path)?;

    let app = CliApp::new(config, store);
    app.run(args.command).await
}
