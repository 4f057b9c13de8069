use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::validator::ContactValidator;
use crate::config::ExportConfig;

/// Writes validated email addresses to a plain text file, one per line.
pub struct EmailExporter {
    validator: ContactValidator,
}

impl EmailExporter {
    pub fn new() -> Self {
        Self {
            validator: ContactValidator::new(),
        }
    }

    /// Creates (or truncates) `destination` and writes every address that
    /// passes validation, in delivered order, newline-terminated. Values
    /// that fail validation are dropped without a trace. Returns the number
    /// of lines written.
    pub fn export_to_file(&self, destination: &Path, emails: &[String]) -> std::io::Result<usize> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = std::fs::File::create(destination)?;
        let mut written = 0usize;

        for email in emails {
            if self.validator.is_valid_email(email) {
                writeln!(file, "{}", email)?;
                written += 1;
            }
        }

        debug!("✅ Wrote {} addresses to {}", written, destination.display());
        Ok(written)
    }

    pub fn default_output_path(config: &ExportConfig) -> PathBuf {
        Path::new(&config.directory).join(&config.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ContactStore;
    use crate::models::NewContact;
    use tempfile::TempDir;

    fn emails(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn writes_only_valid_emails_in_delivered_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emails.txt");

        let written = EmailExporter::new()
            .export_to_file(&path, &emails(&["a@b.com", "not-an-email", "c@d.io"]))
            .unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "a@b.com\nc@d.io\n"
        );
    }

    #[test]
    fn rerunning_export_truncates_rather_than_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emails.txt");
        let exporter = EmailExporter::new();
        let values = emails(&["a@b.com", "c@d.io"]);

        exporter.export_to_file(&path, &values).unwrap();
        let first = std::fs::read(&path).unwrap();
        exporter.export_to_file(&path, &values).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);

        // A smaller run must not leave stale lines behind.
        exporter
            .export_to_file(&path, &emails(&["solo@example.com"]))
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "solo@example.com\n"
        );
    }

    #[test]
    fn empty_sequence_yields_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emails.txt");

        let written = EmailExporter::new().export_to_file(&path, &[]).unwrap();

        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out").join("emails.txt");

        EmailExporter::new()
            .export_to_file(&path, &emails(&["a@b.com"]))
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a@b.com\n");
    }

    #[test]
    fn default_output_path_joins_directory_and_filename() {
        let config = ExportConfig {
            directory: "out".to_string(),
            filename: "emails.txt".to_string(),
        };
        assert_eq!(
            EmailExporter::default_output_path(&config),
            Path::new("out").join("emails.txt")
        );
    }

    #[test]
    fn insert_then_export_includes_the_stored_email() {
        let store = ContactStore::open_in_memory().unwrap();
        store
            .insert_contact(&NewContact {
                name: "Ahmet Yilmaz".to_string(),
                email: Some("ahmet@example.com".to_string()),
                phone: Some("5551234567".to_string()),
                address: Some("Ankara".to_string()),
            })
            .unwrap();
        store
            .insert_contact(&NewContact {
                name: "No Address".to_string(),
                email: Some("broken-at-example".to_string()),
                ..Default::default()
            })
            .unwrap();
        store
            .insert_contact(&NewContact {
                name: "No Email".to_string(),
                ..Default::default()
            })
            .unwrap();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emails.txt");
        let written = EmailExporter::new()
            .export_to_file(&path, &store.fetch_all_emails().unwrap())
            .unwrap();

        assert_eq!(written, 1);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "ahmet@example.com\n"
        );
    }
}
