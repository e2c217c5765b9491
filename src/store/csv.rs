use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use super::{create_file_parent, ContactStore};
use crate::domain::Contact;
use crate::errors::AppError;

pub const CSV_COLUMNS: [&str; 3] = ["name", "phone", "email"];

/// Flat csv file with a `name,phone,email` header line.
pub struct CsvStore {
    pub path: PathBuf,
}

impl CsvStore {
    pub fn new(path: &Path) -> Self {
        CsvStore {
            path: path.to_path_buf(),
        }
    }
}

impl ContactStore for CsvStore {
    /// First run: put a header-only file in place so later loads see a
    /// well formed store.
    fn ensure(&self) -> Result<(), AppError> {
        if fs::exists(&self.path)? {
            return Ok(());
        }
        create_file_parent(&self.path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(CSV_COLUMNS)?;
        writer.flush()?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;

        let mut contacts = Vec::new();
        for record in reader.records() {
            let record = record?;

            // Rows may come up short if the file was edited by hand.
            // Missing cells read as empty, extra cells are dropped.
            contacts.push(Contact {
                name: record.get(0).unwrap_or("").trim().to_string(),
                phone: record.get(1).unwrap_or("").trim().to_string(),
                email: record.get(2).unwrap_or("").trim().to_string(),
            });
        }

        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Header goes out by hand so an empty list still writes a
        // header-only file.
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(CSV_COLUMNS)?;

        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> CsvStore {
        CsvStore::new(&dir.join("contact_list.csv"))
    }

    #[test]
    fn ensure_writes_a_header_only_file() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = store_in(dir.path());

        store.ensure()?;

        assert_eq!(fs::read_to_string(&store.path)?, "name,phone,email\n");
        Ok(())
    }

    #[test]
    fn ensure_leaves_an_existing_file_alone() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = store_in(dir.path());
        fs::write(&store.path, "name,phone,email\nUche,01234567890,\n")?;

        store.ensure()?;

        assert_eq!(store.load()?.len(), 1);
        Ok(())
    }

    #[test]
    fn missing_file_loads_as_empty() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = store_in(dir.path());

        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn empty_list_saves_as_header_only() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = store_in(dir.path());

        store.save(&[])?;

        assert_eq!(fs::read_to_string(&store.path)?, "name,phone,email\n");
        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = store_in(dir.path());

        let contacts = vec![
            Contact {
                name: "Uche".to_string(),
                phone: "01234567890".to_string(),
                email: "ucheuche@gmail.com".to_string(),
            },
            Contact {
                name: "Okafor, Jnr".to_string(),
                phone: "+2348031112222".to_string(),
                email: "".to_string(),
            },
        ];

        store.save(&contacts)?;

        assert_eq!(store.load()?, contacts);
        Ok(())
    }

    #[test]
    fn comma_in_a_field_is_quoted_on_disk() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = store_in(dir.path());

        store.save(&[Contact {
            name: "Okafor, Jnr".to_string(),
            phone: "08031112222".to_string(),
            email: "".to_string(),
        }])?;

        let contents = fs::read_to_string(&store.path)?;
        assert!(contents.contains("\"Okafor, Jnr\""));
        Ok(())
    }

    #[test]
    fn short_rows_read_as_empty_fields() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = store_in(dir.path());
        fs::write(&store.path, "name,phone,email\nUche\nAlex,08031112222\n")?;

        let contacts = store.load()?;

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].phone, "");
        assert_eq!(contacts[0].email, "");
        assert_eq!(contacts[1].phone, "08031112222");
        assert_eq!(contacts[1].email, "");
        Ok(())
    }

    #[test]
    fn extra_columns_are_dropped_on_load() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = store_in(dir.path());
        fs::write(
            &store.path,
            "name,phone,email\nUche,01234567890,ucheuche@gmail.com,work\n",
        )?;

        let contacts = store.load()?;

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].email, "ucheuche@gmail.com");
        Ok(())
    }

    #[test]
    fn loaded_fields_are_trimmed() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = store_in(dir.path());
        fs::write(&store.path, "name,phone,email\n Uche , 01234567890 ,\n")?;

        let contacts = store.load()?;

        assert_eq!(contacts[0].name, "Uche");
        assert_eq!(contacts[0].phone, "01234567890");
        Ok(())
    }
}
