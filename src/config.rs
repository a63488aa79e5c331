// src/config.rs
//! Process configuration, read from `LEXISCAN_*` environment variables.
//! Command-line flags override individual fields after loading.

use std::path::PathBuf;

use crate::{
    history::{DEFAULT_CAP, DEFAULT_PREFIX_CHARS, FileHistory, HistoryStore, MemoryHistory},
    lexer::tables::{KeywordCase, TableError, TransitionTable, load_table_json},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file backing the history; `None` keeps history in memory.
    pub history_path: Option<PathBuf>,
    pub history_cap: usize,
    pub prefix_chars: usize,
    /// Table definition to load instead of the built-in one.
    pub table_path: Option<PathBuf>,
    pub keyword_case: KeywordCase,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: None,
            history_cap: DEFAULT_CAP,
            prefix_chars: DEFAULT_PREFIX_CHARS,
            table_path: None,
            keyword_case: KeywordCase::default(),
        }
    }
}

fn var_usize(var: &impl Fn(&str) -> Option<String>, name: &str, default: usize) -> usize {
    match var(name) {
        Some(s) => s.trim().parse::<usize>().unwrap_or_else(|e| {
            log::warn!("{name}={s:?} is not a count ({e}); using {default}");
            default
        }),
        None => default,
    }
}

fn var_path(var: &impl Fn(&str) -> Option<String>, name: &str) -> Option<PathBuf> {
    var(name).filter(|v| !v.is_empty()).map(PathBuf::from)
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; unset or malformed values fall back
    /// to the defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let keyword_case = match var("LEXISCAN_KEYWORD_CASE") {
            Some(v) => v.parse().unwrap_or_else(|e| {
                log::warn!("{e}; using the default");
                KeywordCase::default()
            }),
            None => KeywordCase::default(),
        };
        Self {
            history_path: var_path(&var, "LEXISCAN_HISTORY"),
            history_cap: var_usize(&var, "LEXISCAN_HISTORY_CAP", DEFAULT_CAP),
            prefix_chars: var_usize(&var, "LEXISCAN_HISTORY_PREFIX", DEFAULT_PREFIX_CHARS),
            table_path: var_path(&var, "LEXISCAN_TABLE"),
            keyword_case,
        }
    }

    /// Built-in table, or the configured definition file. Errors here are
    /// meant to stop the process before any scan runs.
    pub fn load_table(&self) -> Result<TransitionTable, TableError> {
        match &self.table_path {
            Some(path) => load_table_json(path, self.keyword_case),
            None => Ok(TransitionTable::reference().with_keyword_case(self.keyword_case)),
        }
    }

    pub fn history_store(&self) -> Box<dyn HistoryStore> {
        match &self.history_path {
            Some(path) => Box::new(FileHistory::with_cap(path, self.history_cap)),
            None => Box::new(MemoryHistory::with_cap(self.history_cap)),
        }
    }
}
