// src/history/mod.rs
//! Bounded, most-recent-first record of past analyses.
//!
//! Every backend serializes its operations behind one lock, so concurrent
//! callers never lose an append or a delete.

mod file;
mod memory;

pub use file::FileHistory;
pub use memory::MemoryHistory;

use serde::{Deserialize, Serialize};

use crate::{analysis::AnalysisResult, lexer::TokenStats};

pub const DEFAULT_CAP: usize = 50;
pub const DEFAULT_PREFIX_CHARS: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("history could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary of one analysis as kept in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    /// At most `prefix_chars` characters of the analyzed source.
    pub source_code: String,
    pub total_tokens: usize,
    pub token_stats: TokenStats,
    pub timestamp: u64,
}

impl HistoryEntry {
    pub fn summarize(result: &AnalysisResult, prefix_chars: usize) -> Self {
        Self {
            id: result.id.clone(),
            source_code: result.source_code.chars().take(prefix_chars).collect(),
            total_tokens: result.total_tokens,
            token_stats: result.token_stats.clone(),
            timestamp: result.timestamp,
        }
    }
}

pub trait HistoryStore: Send + Sync {
    /// Prepend `entry`, dropping the oldest entries beyond the cap.
    fn record(&self, entry: HistoryEntry) -> Result<(), HistoryError>;
    /// All entries, newest first.
    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;
    /// Returns whether an entry with `id` existed.
    fn delete(&self, id: &str) -> Result<bool, HistoryError>;
    fn clear(&self) -> Result<(), HistoryError>;
}

fn push_front_trimmed(list: &mut Vec<HistoryEntry>, entry: HistoryEntry, cap: usize) {
    list.insert(0, entry);
    list.truncate(cap);
}

fn remove_by_id(list: &mut Vec<HistoryEntry>, id: &str) -> bool {
    let before = list.len();
    list.retain(|e| e.id != id);
    list.len() != before
}
