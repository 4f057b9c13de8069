use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{config::Config, database::ContactStore};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// A contact row as stored. Only `name` is required; the other fields are
/// optional and validated (email, phone) before they reach the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: Option<i64>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for a contact about to be inserted.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StoreStats {
    pub total_contacts: i64,
    pub contacts_with_email: i64,
    pub contacts_with_phone: i64,
    pub contacts_with_address: i64,
}

pub struct CliApp {
    pub config: Config,
    pub store: ContactStore,
}
