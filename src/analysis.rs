// src/analysis.rs
// The externally visible result of one scan.

use serde::{Deserialize, Serialize};

use crate::lexer::{
    Scanner, Token, TokenStats, TransitionTrace,
    ids::{next_id, unix_millis},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: String,
    pub source_code: String,
    pub tokens: Vec<Token>,
    pub state_transitions: Vec<TransitionTrace>,
    pub token_stats: TokenStats,
    pub total_tokens: usize,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl AnalysisResult {
    pub fn new(scanner: &Scanner<'_>, source: &str) -> Self {
        let scan = scanner.scan(source);
        let token_stats = TokenStats::from_tokens(&scan.tokens);
        Self {
            id: next_id("res"),
            source_code: source.to_string(),
            total_tokens: scan.tokens.len(),
            tokens: scan.tokens,
            state_transitions: scan.traces,
            token_stats,
            timestamp: unix_millis(),
        }
    }
}

/// Scan `source` with the reference table and package the result.
pub fn analyze(source: &str) -> AnalysisResult {
    AnalysisResult::new(&Scanner::default(), source)
}
