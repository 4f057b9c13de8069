use tracing::debug;

use crate::models::{CliApp, Result};

impl CliApp {
    pub async fn show_store_stats(&self) -> Result<()> {
        debug!("📊 show_store_stats() - Starting...");

        let stats = self.store.store_stats()?;

        println!("\n📊 Contact Store Statistics");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("👥 Total contacts: {}", stats.total_contacts);
        println!("📧 With email: {}", stats.contacts_with_email);
        println!("📞 With phone: {}", stats.contacts_with_phone);
        println!("🏠 With address: {}", stats.contacts_with_address);

        if stats.total_contacts > 0 {
            let email_percentage = (stats.contacts_with_email * 100) / stats.total_contacts;
            println!("\n📈 Email coverage: {}%", email_percentage);
        }

        Ok(())
    }
}
