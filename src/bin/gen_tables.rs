// src/bin/gen_tables.rs
// Write the built-in transition table as JSON, ready to be edited and fed back
// through `--table` / LEXISCAN_TABLE.
use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use lexiscan::lexer::tables::{KeywordCase, load_table_json, save_table_json, transition_table};

fn main() -> Result<()> {
    env_logger::init();
    let out_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tables/transition_table.json"));

    println!("[gen_tables] writing reference DFA ({} keywords)...", transition_table().keywords().len());
    if let Some(dir) = out_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    save_table_json(&out_path, transition_table())
        .with_context(|| format!("write {}", out_path.display()))?;

    // Read it back so a broken export fails here rather than at startup.
    load_table_json(&out_path, KeywordCase::default())
        .with_context(|| format!("re-load {}", out_path.display()))?;

    let bytes = fs::metadata(&out_path)?.len();
    println!(
        "[gen_tables] wrote {} bytes (~{:.1} KiB) → {}",
        bytes,
        bytes as f64 / 1024.0,
        out_path.display()
    );
    Ok(())
}
