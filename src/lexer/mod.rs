// src/lexer/mod.rs
pub mod ids;
pub mod scan;
pub mod stats;
pub mod tables;
pub mod trace;

pub use scan::{Scan, Scanner, Token, scan};
pub use stats::TokenStats;
pub use tables::{TokenKind, TransitionTable, transition_table};
pub use trace::{TraceStep, TransitionTrace};
