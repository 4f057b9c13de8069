use crate::models::{CliApp, Result};

impl CliApp {
    pub async fn run_list_contacts(&self, search: Option<&str>) -> Result<()> {
        let contacts = self.store.fetch_contacts(search)?;

        if contacts.is_empty() {
            match search {
                Some(term) => println!("No contacts matching '{}'", term),
                None => println!("No contacts in the directory yet"),
            }
            return Ok(());
        }

        println!("\n📇 Contacts ({})", contacts.len());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━");
        for contact in &contacts {
            println!(
                "  [{}] {} | email: {} | phone: {}",
                contact.id.unwrap_or(0),
                contact.name,
                contact.email.as_deref().unwrap_or("-"),
                contact.phone.as_deref().unwrap_or("-"),
            );
            if let Some(address) = &contact.address {
                println!("        {}", address);
            }
        }

        Ok(())
    }
}
