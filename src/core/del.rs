//! High-level business logic for the `del` command.
//! Deleting an unknown id is a no-op, not an error.

use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(store: &RecordStore, id: i64) -> AppResult<()> {
        let records = store.load()?;
        let before = records.len();

        let remaining: Vec<_> = records.into_iter().filter(|r| r.id != id).collect();

        if remaining.len() == before {
            info(format!("No episode with id {}, nothing deleted", id));
            return Ok(());
        }

        // every derived view recomputes from the saved list, so the episode
        // disappears from calendar, summaries and charts on the next read
        store.save(&remaining)?;

        success(format!("Deleted episode {}", id));
        Ok(())
    }
}
