// src/service.rs
//! Request-level API: input validation, analysis, and history bookkeeping
//! around the scanner. Every caller-facing surface goes through this type.

use std::collections::BTreeMap;

use crate::{
    analysis::AnalysisResult,
    config::Config,
    history::{DEFAULT_PREFIX_CHARS, HistoryEntry, HistoryError, HistoryStore},
    lexer::{
        Scanner,
        tables::{TableError, TokenKind, TransitionTable, tokens::TokenTypeInfo},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("source code is required")]
    EmptySource,
    #[error(transparent)]
    History(#[from] HistoryError),
}

pub struct Service {
    table: TransitionTable,
    history: Box<dyn HistoryStore>,
    prefix_chars: usize,
}

impl Service {
    pub fn new(table: TransitionTable, history: Box<dyn HistoryStore>) -> Self {
        Self {
            table,
            history,
            prefix_chars: DEFAULT_PREFIX_CHARS,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, TableError> {
        let table = config.load_table()?;
        Ok(Self::new(table, config.history_store()).with_prefix_chars(config.prefix_chars))
    }

    pub fn with_prefix_chars(mut self, n: usize) -> Self {
        self.prefix_chars = n;
        self
    }

    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.table)
    }

    /// Analyze `source` and record a summary in history.
    pub fn analyze(&self, source: &str) -> Result<AnalysisResult, ServiceError> {
        let result = self.analyze_untracked(source)?;
        self.history
            .record(HistoryEntry::summarize(&result, self.prefix_chars))?;
        log::debug!(
            "analysis {} recorded: {} tokens",
            result.id,
            result.total_tokens
        );
        Ok(result)
    }

    /// Analyze without touching history. Blank input is still rejected.
    pub fn analyze_untracked(&self, source: &str) -> Result<AnalysisResult, ServiceError> {
        if source.trim().is_empty() {
            return Err(ServiceError::EmptySource);
        }
        Ok(AnalysisResult::new(&self.scanner(), source))
    }

    pub fn transition_table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn token_types(&self) -> BTreeMap<TokenKind, TokenTypeInfo> {
        crate::lexer::tables::tokens::token_types()
    }

    pub fn history(&self) -> Result<Vec<HistoryEntry>, ServiceError> {
        Ok(self.history.list()?)
    }

    pub fn delete_history(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.history.delete(id)?)
    }

    pub fn clear_history(&self) -> Result<(), ServiceError> {
        Ok(self.history.clear()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;

    fn service() -> Service {
        Service::new(TransitionTable::reference(), Box::new(MemoryHistory::default()))
    }

    #[test]
    fn blank_source_is_rejected_before_scanning() {
        let s = service();
        assert!(matches!(s.analyze(""), Err(ServiceError::EmptySource)));
        assert!(matches!(s.analyze(" \n\t"), Err(ServiceError::EmptySource)));
        assert!(s.history().unwrap().is_empty());
    }

    #[test]
    fn analyze_records_newest_first() {
        let s = service();
        let a = s.analyze("int a;").unwrap();
        let b = s.analyze("b").unwrap();
        let ids: Vec<String> = s.history().unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[test]
    fn untracked_analysis_leaves_history_alone() {
        let s = service();
        s.analyze_untracked("x").unwrap();
        assert!(s.history().unwrap().is_empty());
    }

    #[test]
    fn delete_and_clear() {
        let s = service();
        let a = s.analyze("a").unwrap();
        s.analyze("b").unwrap();
        assert!(s.delete_history(&a.id).unwrap());
        assert!(!s.delete_history(&a.id).unwrap());
        assert_eq!(s.history().unwrap().len(), 1);
        s.clear_history().unwrap();
        assert!(s.history().unwrap().is_empty());
    }

    #[test]
    fn token_types_cover_every_kind() {
        let types = service().token_types();
        assert_eq!(types.len(), 10);
        assert_eq!(types[&TokenKind::Error].description, "Unrecognized tokens");
    }
}
