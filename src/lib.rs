// src/lib.rs
//! Table-driven lexical scanner for a loose C-like language.
//!
//! [`lexer::scan`] turns source text into classified tokens plus, for each
//! token, the automaton states visited while recognizing it. [`service::Service`]
//! wraps the scanner with input validation and a bounded analysis history.

pub mod analysis;
pub mod config;
pub mod dev;
pub mod history;
pub mod lexer;
pub mod service;

pub use analysis::{AnalysisResult, analyze};
pub use lexer::{Scan, Scanner, Token, TokenKind, TransitionTable, scan, transition_table};
