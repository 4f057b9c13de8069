use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Contact, NewContact, StoreStats};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open contact store: {0}")]
    Open(#[source] rusqlite::Error),
    #[error("contact store statement failed: {0}")]
    Statement(#[from] rusqlite::Error),
}

/// Handle on the SQLite contact store. One connection per process run,
/// shared by every operation and released on drop.
pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    pub fn open(db_path: &str) -> Result<Self, StorageError> {
        debug!("Opening contact store: {}", db_path);

        let conn = Connection::open(db_path).map_err(StorageError::Open)?;
        configure_connection(&conn)?;
        init_schema(&conn)?;

        info!("✓ Contact store ready: {}", db_path);
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(StorageError::Open)?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn insert_contact(&self, contact: &NewContact) -> Result<i64, StorageError> {
        debug!("💾 insert_contact() - Inserting: {}", contact.name);

        let now = Utc::now();
        self.conn.execute(
            r#"
            INSERT INTO contacts (name, email, phone, address, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                contact.name,
                contact.email,
                contact.phone,
                contact.address,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("✅ Contact stored with id {}", id);
        Ok(id)
    }

    /// Every value of the email column, in store (rowid) order. NULL comes
    /// back as an empty string so the export validator stays the single
    /// filtering point.
    pub fn fetch_all_emails(&self) -> Result<Vec<String>, StorageError> {
        debug!("📧 fetch_all_emails() - Reading email column...");

        let mut stmt = self.conn.prepare("SELECT email FROM contacts")?;
        let rows = stmt.query_map([], |row| {
            Ok(row.get::<_, Option<String>>(0)?.unwrap_or_default())
        })?;

        let mut emails = Vec::new();
        for email in rows {
            emails.push(email?);
        }

        debug!("✅ Fetched {} email values", emails.len());
        Ok(emails)
    }

    /// Full contact rows ordered by name. A search term matches name,
    /// email, phone or address, case-insensitively.
    pub fn fetch_contacts(&self, search: Option<&str>) -> Result<Vec<Contact>, StorageError> {
        let mut contacts = Vec::new();

        match search {
            Some(term) => {
                debug!("🔍 fetch_contacts() - Searching for: {}", term);
                let pattern = format!("%{}%", term);
                let mut stmt = self.conn.prepare(
                    r#"
                    SELECT id, name, email, phone, address, created_at, updated_at
                    FROM contacts
                    WHERE name LIKE ?1 OR email LIKE ?1 OR phone LIKE ?1 OR address LIKE ?1
                    ORDER BY name COLLATE NOCASE
                    "#,
                )?;
                let rows = stmt.query_map(params![pattern], contact_from_row)?;
                for contact in rows {
                    contacts.push(contact?);
                }
            }
            None => {
                debug!("🔍 fetch_contacts() - Listing all contacts");
                let mut stmt = self.conn.prepare(
                    r#"
                    SELECT id, name, email, phone, address, created_at, updated_at
                    FROM contacts
                    ORDER BY name COLLATE NOCASE
                    "#,
                )?;
                let rows = stmt.query_map([], contact_from_row)?;
                for contact in rows {
                    contacts.push(contact?);
                }
            }
        }

        debug!("✅ Fetched {} contacts", contacts.len());
        Ok(contacts)
    }

    pub fn fetch_contact(&self, id: i64) -> Result<Option<Contact>, StorageError> {
        debug!("🔍 fetch_contact() - Looking for id: {}", id);

        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, email, phone, address, created_at, updated_at
            FROM contacts WHERE id = ?1
            "#,
        )?;
        let mut rows = stmt.query_map(params![id], contact_from_row)?;

        match rows.next() {
            Some(contact) => Ok(Some(contact?)),
            None => Ok(None),
        }
    }

    /// Deletes by id. Returns false when no row matched.
    pub fn remove_contact(&self, id: i64) -> Result<bool, StorageError> {
        debug!("🗑️ remove_contact() - Removing id: {}", id);

        let affected = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    pub fn store_stats(&self) -> Result<StoreStats, StorageError> {
        debug!("📊 store_stats() - Collecting statistics...");

        let count = |sql: &str| -> Result<i64, rusqlite::Error> {
            self.conn.query_row(sql, [], |row| row.get(0))
        };

        let stats = StoreStats {
            total_contacts: count("SELECT COUNT(*) FROM contacts")?,
            contacts_with_email: count(
                "SELECT COUNT(*) FROM contacts WHERE email IS NOT NULL AND email != ''",
            )?,
            contacts_with_phone: count(
                "SELECT COUNT(*) FROM contacts WHERE phone IS NOT NULL AND phone != ''",
            )?,
            contacts_with_address: count(
                "SELECT COUNT(*) FROM contacts WHERE address IS NOT NULL AND address != ''",
            )?,
        };

        debug!("✅ store_stats() completed");
        Ok(stats)
    }
}

fn configure_connection(conn: &Connection) -> Result<(), StorageError> {
    // Some PRAGMA statements return a row; fall back to query_row for those.
    let exec_pragma = |pragma: &str| -> Result<(), rusqlite::Error> {
        match conn.execute(pragma, []) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::ExecuteReturnedResults) => {
                conn.query_row(pragma, [], |_| Ok(()))
            }
            Err(e) => Err(e),
        }
    };

    exec_pragma("PRAGMA journal_mode=WAL")?;
    exec_pragma("PRAGMA synchronous=NORMAL")?;
    Ok(())
}

fn init_schema(conn: &Connection) -> Result<(), StorageError> {
    debug!("🏗️ Initializing contact store schema...");

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT,
            phone TEXT,
            address TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        [],
    )?;

    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_contacts_name ON contacts(name)",
        "CREATE INDEX IF NOT EXISTS idx_contacts_email ON contacts(email)",
    ];
    for index_sql in indexes.iter() {
        conn.execute(index_sql, [])?;
    }

    debug!("✅ Schema initialized");
    Ok(())
}

fn contact_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
    let get_optional_string = |idx: usize| -> Option<String> {
        match row.get::<_, Option<String>>(idx) {
            Ok(Some(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    };

    let created_at_str: String = row.get(5)?;
    let updated_at_str: String = row.get(6)?;

    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                5,
                created_at_str.clone(),
                rusqlite::types::Type::Text,
            )
        })?
        .with_timezone(&Utc);
    let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)
        .map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                6,
                updated_at_str.clone(),
                rusqlite::types::Type::Text,
            )
        })?
        .with_timezone(&Utc);

    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        email: get_optional_string(2),
        phone: get_optional_string(3),
        address: get_optional_string(4),
        created_at,
        updated_at,
    })
}
