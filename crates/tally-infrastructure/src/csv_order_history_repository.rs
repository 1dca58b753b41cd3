//! Append-only CSV order history.
//!
//! One row per confirmed order, no header:
//!
//! ```text
//! 482913,"2 Hamburgers, Pizza",$26.95
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tally_core::submission::{OrderHistoryRepository, OrderRecord};
use tally_core::{Result, TallyError};

pub struct CsvOrderHistoryRepository {
    path: PathBuf,
}

impl CsvOrderHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_row(&self, record: &OrderRecord) -> std::result::Result<(), Box<dyn std::error::Error>> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);
        writer.write_record(record.to_row())?;
        writer.flush()?;
        Ok(())
    }
}

impl OrderHistoryRepository for CsvOrderHistoryRepository {
    fn append(&self, record: &OrderRecord) -> Result<()> {
        self.write_row(record)
            .map_err(|e| TallyError::history(format!("{}: {}", self.path.display(), e)))?;
        tracing::debug!("Appended order {} to {:?}", record.confirmation, self.path);
        Ok(())
    }
}
