// src/lexer/trace.rs
// Per-token record of the automaton states a lexeme walked through.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::lexer::tables::{S, TransitionTable};

/// `char` value of a step that finalizes without consuming input.
pub const END_MARKER: &str = "<end>";

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    #[serde_as(as = "DisplayFromStr")]
    pub state: S,
    pub char: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTrace {
    pub lexeme: String,
    pub path: Vec<TraceStep>,
}

/// Builds one `TransitionTrace`; always opens at the table's start state.
pub(crate) struct TraceRecorder<'t> {
    table: &'t TransitionTable,
    path: Vec<TraceStep>,
}

impl<'t> TraceRecorder<'t> {
    pub fn new(table: &'t TransitionTable) -> Self {
        let start = table.start();
        Self {
            table,
            path: vec![TraceStep {
                state: start,
                char: String::new(),
                label: table.label_of(start).to_string(),
            }],
        }
    }

    pub fn enter(&mut self, state: S, c: char) {
        let mut buf = [0u8; 4];
        self.push(state, c.encode_utf8(&mut buf));
    }

    pub fn enter_with(&mut self, state: S, consumed: &str) {
        self.push(state, consumed);
    }

    pub fn finish(&mut self, state: S) {
        self.push(state, END_MARKER);
    }

    fn push(&mut self, state: S, ch: &str) {
        self.path.push(TraceStep {
            state,
            char: ch.to_string(),
            label: self.table.label_of(state).to_string(),
        });
    }

    pub fn last_state(&self) -> S {
        // `path` is never empty: `new` seeds the start step.
        self.path.last().map_or(self.table.start(), |s| s.state)
    }

    pub fn into_trace(self, lexeme: &str) -> TransitionTrace {
        TransitionTrace {
            lexeme: lexeme.to_string(),
            path: self.path,
        }
    }
}
