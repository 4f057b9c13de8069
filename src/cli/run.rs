use crate::cli::Command;
use crate::models::{CliApp, Result};

impl CliApp {
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Add {
                name,
                email,
                phone,
                address,
            } => self.run_add_contact(name, email, phone, address).await,
            Command::List { search } => self.run_list_contacts(search.as_deref()).await,
            Command::Remove { id, yes } => self.run_remove_contact(id, yes).await,
            Command::Export { output } => self.run_export_emails(output.as_deref()).await,
            Command::Stats => self.show_store_stats().await,
        }
    }
}
