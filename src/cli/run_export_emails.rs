use std::path::PathBuf;

use tracing::info;

use crate::email_export::EmailExporter;
use crate::models::{CliApp, Result};

impl CliApp {
    pub async fn run_export_emails(&self, output: Option<&str>) -> Result<()> {
        println!("\n📧 Email Export");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let destination = match output {
            Some(path) => PathBuf::from(path),
            None => EmailExporter::default_output_path(&self.config.export),
        };

        println!("📊 Reading email addresses from the contact store...");
        let emails = self.store.fetch_all_emails()?;
        info!("Fetched {} contact rows", emails.len());

        let exporter = EmailExporter::new();
        let written = exporter.export_to_file(&destination, &emails)?;

        println!("\n✅ Export complete!");
        println!("📁 File: {}", destination.display());
        println!("📧 Addresses written: {}", written);
        Ok(())
    }
}
