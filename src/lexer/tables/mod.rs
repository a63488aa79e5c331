// src/lexer/tables/mod.rs
pub mod dfa;
pub mod io;
pub mod keywords;
pub mod tokens;

use std::sync::LazyLock;

pub use dfa::{InputClass, Row, S, StateKind, classify};
pub use io::{load_table_json, load_table_json_bytes, save_table_json, table_to_json};
pub use keywords::{KeywordCase, KeywordSet};
pub use tokens::{ALL_KINDS, TokenKind};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to parse transition table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read transition table: {0}")]
    Io(#[from] std::io::Error),
    #[error("transition table does not define state {0}")]
    MissingState(&'static str),
    #[error("transition table must have exactly one start state, found {0}")]
    StartCount(usize),
    #[error("start state must be q0, found {0}")]
    StartNotQ0(S),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateInfo {
    pub kind: StateKind,
    pub label: String,
}

/// Immutable automaton definition shared by every scan.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    states: Vec<StateInfo>,
    rows: Vec<Row>,
    keywords: KeywordSet,
}

static REFERENCE: LazyLock<TransitionTable> = LazyLock::new(TransitionTable::reference);

/// The process-wide reference table.
pub fn transition_table() -> &'static TransitionTable {
    &REFERENCE
}

impl TransitionTable {
    pub fn reference() -> Self {
        let states = dfa::REFERENCE_STATES
            .iter()
            .map(|&(_, kind, label)| StateInfo {
                kind,
                label: label.to_string(),
            })
            .collect();
        Self {
            states,
            rows: dfa::reference_rows(),
            keywords: KeywordSet::reference(),
        }
    }

    /// Assemble a table from a parsed definition. `states` and `rows` are
    /// indexed by `S::idx()`; a missing state entry is an error, a missing
    /// row means the state has no outgoing edges.
    pub fn from_parts(
        states: Vec<Option<StateInfo>>,
        mut rows: Vec<Row>,
        keywords: KeywordSet,
    ) -> Result<Self, TableError> {
        let mut out = Vec::with_capacity(dfa::N_STATES);
        for s in dfa::ALL_STATES {
            match states.get(s.idx()).cloned().flatten() {
                Some(info) => out.push(info),
                None => return Err(TableError::MissingState(s.id())),
            }
        }

        let starts: Vec<S> = dfa::ALL_STATES
            .iter()
            .copied()
            .filter(|s| out[s.idx()].kind == StateKind::Start)
            .collect();
        match starts.as_slice() {
            [dfa::START] => {}
            [other] => return Err(TableError::StartNotQ0(*other)),
            _ => return Err(TableError::StartCount(starts.len())),
        }

        for s in dfa::ALL_STATES {
            let info = &out[s.idx()];
            if info.kind == StateKind::Accepting && label_kind(&info.label).is_none() {
                log::warn!(
                    "accepting state {s} has label {:?} with no token mapping; it will emit ERROR",
                    info.label
                );
            }
        }

        rows.resize_with(dfa::N_STATES, Row::new);
        Ok(Self {
            states: out,
            rows,
            keywords,
        })
    }

    pub fn with_keyword_case(mut self, case: KeywordCase) -> Self {
        self.keywords = self.keywords.with_case(case);
        self
    }

    pub fn start(&self) -> S {
        dfa::START
    }

    /// Exact class first, then the state's `other` edge; `None` is a dead end.
    pub fn next_state(&self, s: S, class: InputClass) -> Option<S> {
        let row = &self.rows[s.idx()];
        row.get(&class)
            .or_else(|| row.get(&InputClass::Other))
            .copied()
    }

    pub fn step(&self, s: S, c: char) -> Option<S> {
        self.next_state(s, classify(c))
    }

    pub fn label_of(&self, s: S) -> &str {
        &self.states[s.idx()].label
    }

    pub fn kind_of(&self, s: S) -> StateKind {
        self.states[s.idx()].kind
    }

    pub fn row(&self, s: S) -> &Row {
        &self.rows[s.idx()]
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn is_keyword(&self, lexeme: &str) -> bool {
        self.keywords.contains(lexeme)
    }

    /// Token kind for a lexeme that finished in `s`, decided by the state's label.
    pub fn token_kind_for(&self, s: S, lexeme: &str) -> TokenKind {
        match label_kind(self.label_of(s)) {
            Some(TokenKind::Identifier) if self.is_keyword(lexeme) => TokenKind::Keyword,
            Some(k) => k,
            None => TokenKind::Error,
        }
    }
}

fn label_kind(label: &str) -> Option<TokenKind> {
    Some(match label {
        "Identifier/Keyword" => TokenKind::Identifier,
        "Integer" => TokenKind::Integer,
        "Float" => TokenKind::Float,
        "Operator" => TokenKind::Operator,
        "Delimiter" => TokenKind::Delimiter,
        "String" => TokenKind::String,
        "Comparison/Assignment" => TokenKind::Comparison,
        "Comment" => TokenKind::Comment,
        _ => return None,
    })
}
