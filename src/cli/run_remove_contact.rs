use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::info;

use crate::models::{CliApp, Result};

impl CliApp {
    pub async fn run_remove_contact(&self, id: i64, yes: bool) -> Result<()> {
        let contact = match self.store.fetch_contact(id)? {
            Some(contact) => contact,
            None => return Err(format!("no contact with id {}", id).into()),
        };

        if !yes {
            let proceed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Remove {} (id {})?", contact.name, id))
                .interact()?;
            if !proceed {
                println!("✗ Removal cancelled");
                return Ok(());
            }
        }

        self.store.remove_contact(id)?;
        info!("Contact {} removed", id);
        println!("✓ Removed {} (id {})", contact.name, id);
        Ok(())
    }
}
