use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::create_file_parent;
use crate::domain::Contact;
use crate::errors::AppError;

/// Export target for the contact list. Not a live store: writes
/// replace the whole file and reads never touch the csv side.
pub struct JsonSnapshot {
    pub path: PathBuf,
}

impl JsonSnapshot {
    pub fn new(path: &Path) -> Self {
        JsonSnapshot {
            path: path.to_path_buf(),
        }
    }

    pub fn write(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Four space indentation, non-ascii characters stay literal
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut data = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
        contacts.serialize(&mut serializer)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(&data)?;

        Ok(())
    }

    /// `None` means the snapshot file was never written.
    pub fn read(&self) -> Result<Option<Vec<Contact>>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }

        let contacts: Vec<Contact> = serde_json::from_str(&data)?;
        Ok(Some(contacts))
    }
}
