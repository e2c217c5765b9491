use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Append-only error journal. One line per failure event:
/// `[YYYY-MM-DD HH:MM:SS] <operation>: <message>`
pub struct ErrorLog {
    pub path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: &Path) -> Self {
        ErrorLog {
            path: path.to_path_buf(),
        }
    }

    /// Logging must never take the program down, so a failure to write
    /// the log line is swallowed.
    pub fn record(&self, operation: &str, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] {}: {}\n", timestamp, operation, message);

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path);

        if let Ok(mut file) = file {
            let _ = file.write_all(line.as_bytes());
        }
    }
}
