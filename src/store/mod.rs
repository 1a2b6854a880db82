//! Whole-list JSON persistence for attack records.
//!
//! The store owns the full ordered list (newest first); add and delete
//! replace the entire document in one write, so the persisted state always
//! matches the last successful mutation.

use crate::errors::AppResult;
use crate::models::attack::AttackRecord;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full record list. A missing or empty file is an empty log.
    pub fn load(&self) -> AppResult<Vec<AttackRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<AttackRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Load, falling back to an empty list when the file is unreadable.
    /// Aggregation always runs on whatever is in memory, so a broken store
    /// degrades to an empty log instead of aborting.
    pub fn load_or_warn(&self) -> Vec<AttackRecord> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                warning(format!(
                    "Could not load record store '{}': {}",
                    self.path.display(),
                    e
                ));
                Vec::new()
            }
        }
    }

    /// Replace the whole persisted list.
    pub fn save(&self, records: &[AttackRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
