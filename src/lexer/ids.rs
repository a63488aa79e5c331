// src/lexer/ids.rs
// Opaque ids for tokens and analysis results: `<prefix>_<unix millis>_<seq>`.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static SEQ: AtomicU64 = AtomicU64::new(0);

pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub fn next_id(prefix: &str) -> String {
    let n = SEQ.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{prefix}_{}_{n}", unix_millis())
}
