pub mod csv;
pub mod json;
pub mod memory;

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Contact, ContactField, Selector};
use crate::errors::AppError;
use crate::logger::ErrorLog;

pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    /// Prepare the backing medium before first use. Most stores have
    /// nothing to do here.
    fn ensure(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Where the three files of a contact book live.
pub struct StoreConfig {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    pub log_path: PathBuf,
}

impl StoreConfig {
    pub fn new(csv_path: &Path, json_path: &Path, log_path: &Path) -> Self {
        StoreConfig {
            csv_path: csv_path.to_path_buf(),
            json_path: json_path.to_path_buf(),
            log_path: log_path.to_path_buf(),
        }
    }

    /// All three files under one directory, with their default names.
    pub fn in_dir(dir: &Path) -> Self {
        StoreConfig {
            csv_path: dir.join("contact_list.csv"),
            json_path: dir.join("contact_list.json"),
            log_path: dir.join("error_log.txt"),
        }
    }
}

/// One contact book over a csv store, a json snapshot target and an
/// error log. The store file is the single source of truth: every
/// operation reloads it, works on the in-memory list, and writes the
/// whole list back. External edits to the file while a session is
/// running are not defended against.
pub struct ContactBook {
    pub store: Box<dyn ContactStore>,
    pub snapshot: json::JsonSnapshot,
    pub log: ErrorLog,
}

impl ContactBook {
    pub fn new(config: StoreConfig) -> Self {
        let book = ContactBook {
            store: Box::new(csv::CsvStore::new(&config.csv_path)),
            snapshot: json::JsonSnapshot::new(&config.json_path),
            log: ErrorLog::new(&config.log_path),
        };

        if let Err(e) = book.store.ensure() {
            book.log.record("Ensure CSV", &e.to_string());
        }
        book
    }

    /// Read the full contact list. A failed read is logged and comes
    /// back as an empty list so the session can continue.
    pub fn load(&self) -> Vec<Contact> {
        match self.store.load() {
            Ok(contacts) => contacts,
            Err(e) => {
                self.log.record("Read Contacts", &e.to_string());
                Vec::new()
            }
        }
    }

    /// Write the full contact list back. A failed write is logged and
    /// reported to the caller, which records it again under its own
    /// operation tag.
    pub fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        if let Err(e) = self.store.save(contacts) {
            self.log.record("Write Contacts", &e.to_string());
            return Err(e);
        }
        Ok(())
    }

    pub fn add(&self, name: &str, phone: &str, email: &str) -> Result<(), AppError> {
        let contact = Contact::new(name.to_string(), phone.to_string(), email.to_string());

        if contact.name.is_empty() {
            return Err(AppError::Validation(
                "Name cannot be empty. Aborting add.".to_string(),
            ));
        }

        let mut contacts = self.load();

        if contacts.iter().any(|existing| existing.duplicate_of(&contact)) {
            return Err(AppError::Validation(
                "A contact with the same name and phone already exists.".to_string(),
            ));
        }

        contacts.push(contact);

        if let Err(e) = self.save(&contacts) {
            self.log.record("Add Contact", &e.to_string());
            return Err(e);
        }
        Ok(())
    }

    pub fn search(&self, query: &str) -> Vec<Contact> {
        let query = query.trim();
        self.load()
            .into_iter()
            .filter(|contact| contact.matches_query(query))
            .collect()
    }

    /// Replace one field of the selected contact. An empty new value
    /// leaves the field as it was.
    pub fn update(&self, selector: &str, field: ContactField, value: &str) -> Result<(), AppError> {
        let mut contacts = self.load();

        let position = match Selector::parse(selector).resolve(&contacts) {
            Some(position) => position,
            None => return Err(AppError::NotFound("Contact".to_string())),
        };

        let value = value.trim();
        if !value.is_empty() {
            field.apply(&mut contacts[position], value);
        }

        if let Err(e) = self.save(&contacts) {
            self.log.record("Update Contact", &e.to_string());
            return Err(e);
        }
        Ok(())
    }

    /// Remove the selected contact. With `confirmed` false nothing is
    /// touched and `None` comes back; otherwise the removed contact is
    /// returned.
    pub fn delete(&self, selector: &str, confirmed: bool) -> Result<Option<Contact>, AppError> {
        let mut contacts = self.load();

        let position = match Selector::parse(selector).resolve(&contacts) {
            Some(position) => position,
            None => return Err(AppError::NotFound("Contact".to_string())),
        };

        if !confirmed {
            return Ok(None);
        }

        let removed = contacts.remove(position);

        if let Err(e) = self.save(&contacts) {
            self.log.record("Delete Contact", &e.to_string());
            return Err(e);
        }
        Ok(Some(removed))
    }

    /// Dump the current list into the json snapshot file, replacing
    /// whatever was exported before. Returns how many records went out.
    pub fn export_snapshot(&self) -> Result<usize, AppError> {
        let contacts = self.load();

        if let Err(e) = self.snapshot.write(&contacts) {
            self.log.record("Export JSON", &e.to_string());
            return Err(e);
        }
        Ok(contacts.len())
    }

    /// Read the snapshot for display only. `None` means no snapshot
    /// file exists yet. The csv store is never touched.
    pub fn import_preview(&self) -> Result<Option<Vec<Contact>>, AppError> {
        match self.snapshot.read() {
            Ok(preview) => Ok(preview),
            Err(e) => {
                self.log.record("Load JSON", &e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parent_dirs_are_created_on_demand() -> Result<(), AppError> {
        let dir = tempdir()?;
        let nested = dir.path().join("a").join("b").join("contacts.csv");

        create_file_parent(&nested)?;

        assert!(nested.parent().is_some_and(|p| p.exists()));
        Ok(())
    }

    #[test]
    fn bare_file_name_needs_no_parent() -> Result<(), AppError> {
        create_file_parent(Path::new("contact_list.csv"))?;
        Ok(())
    }

    #[test]
    fn config_in_dir_uses_default_names() {
        let config = StoreConfig::in_dir(Path::new("/tmp/book"));

        assert_eq!(config.csv_path, Path::new("/tmp/book/contact_list.csv"));
        assert_eq!(config.json_path, Path::new("/tmp/book/contact_list.json"));
        assert_eq!(config.log_path, Path::new("/tmp/book/error_log.txt"));
    }

    #[test]
    fn new_book_creates_the_store_file() -> Result<(), AppError> {
        let dir = tempdir()?;
        let config = StoreConfig::in_dir(dir.path());

        let book = ContactBook::new(config);

        assert!(dir.path().join("contact_list.csv").exists());
        assert!(book.load().is_empty());
        Ok(())
    }
}
