// src/history/memory.rs
use parking_lot::Mutex;

use super::{DEFAULT_CAP, HistoryEntry, HistoryError, HistoryStore, push_front_trimmed, remove_by_id};

/// In-process history, lost on exit.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
    cap: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_cap(DEFAULT_CAP)
    }
}

impl MemoryHistory {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::with_capacity(cap)),
            cap,
        }
    }
}

impl HistoryStore for MemoryHistory {
    fn record(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        push_front_trimmed(&mut self.entries.lock(), entry, self.cap);
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.lock().clone())
    }

    fn delete(&self, id: &str) -> Result<bool, HistoryError> {
        Ok(remove_by_id(&mut self.entries.lock(), id))
    }

    fn clear(&self) -> Result<(), HistoryError> {
        self.entries.lock().clear();
        Ok(())
    }
}
