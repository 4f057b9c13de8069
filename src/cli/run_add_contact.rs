use dialoguer::{theme::ColorfulTheme, Input};
use tracing::info;

use crate::email_export::ContactValidator;
use crate::models::{CliApp, NewContact, Result};

impl CliApp {
    pub async fn run_add_contact(
        &self,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<()> {
        let validator = ContactValidator::new();

        let name = match name {
            Some(name) => name,
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Name")
                .interact_text()?,
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err("name must not be empty".into());
        }

        let email = normalize(email);
        let phone = normalize(phone);
        let address = normalize(address);

        // Optional fields pass when absent; present values must be plausible.
        if let Some(email) = &email {
            if !validator.is_valid_email(email) {
                return Err(format!("invalid email address: {}", email).into());
            }
        }
        if let Some(phone) = &phone {
            if !validator.is_valid_phone(phone) {
                return Err(format!("invalid phone number: {}", phone).into());
            }
        }

        let contact = NewContact {
            name,
            email,
            phone,
            address,
        };
        let id = self.store.insert_contact(&contact)?;

        info!("Contact '{}' stored with id {}", contact.name, id);
        println!("✓ Contact added: {} (id {})", contact.name, id);
        Ok(())
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
