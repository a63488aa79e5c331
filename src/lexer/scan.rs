// src/lexer/scan.rs
// Single-pass scanner. Token kinds come from fixed character-class rules; each
// rule also drives a `TraceRecorder` so the output explains the lexeme in terms
// of the transition table's states.

use serde::{Deserialize, Serialize};

use crate::lexer::{
    ids::next_id,
    tables::{
        S, TokenKind, TransitionTable,
        dfa::{is_digit, is_letter, is_white},
        transition_table,
    },
    trace::{TraceRecorder, TransitionTrace},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub lexeme: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Zero-based character offset of the first character.
    pub position: usize,
    pub line: usize,
    pub column: usize,
}

/// Tokens and their traces; `traces[i]` explains `tokens[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub traces: Vec<TransitionTrace>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    String,
    LineComment,
    Word,
    Number,
    Comparison,
    Operator,
    Delimiter,
    Directive,
    Fallback,
}

// First match wins; `//` must be checked before the operator rule.
fn select_rule(c: char, next: Option<char>) -> Rule {
    match c {
        '"' | '\'' => Rule::String,
        '/' if next == Some('/') => Rule::LineComment,
        c if is_letter(c) => Rule::Word,
        c if is_digit(c) => Rule::Number,
        '=' | '<' | '>' | '!' => Rule::Comparison,
        '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '~' => Rule::Operator,
        '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | '.' | ':' => Rule::Delimiter,
        '#' => Rule::Directive,
        _ => Rule::Fallback,
    }
}

struct Cursor<'a> {
    src: &'a str,
    chars: Vec<char>,
    // Byte offset of every char, plus `src.len()` as a sentinel.
    offsets: Vec<usize>,
    pos: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        let mut chars = Vec::with_capacity(src.len());
        let mut offsets = Vec::with_capacity(src.len() + 1);
        for (i, c) in src.char_indices() {
            chars.push(c);
            offsets.push(i);
        }
        offsets.push(src.len());
        Self {
            src,
            chars,
            offsets,
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    #[inline]
    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        if c == '\n' {
            self.line += 1;
            self.line_start = self.pos + 1;
        }
        self.pos += 1;
        Some(c)
    }

    fn column(&self) -> usize {
        self.pos - self.line_start + 1
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[self.offsets[start]..self.offsets[end]]
    }
}

/// Drives the scanning rules over a source string against one table.
#[derive(Clone, Copy)]
pub struct Scanner<'t> {
    table: &'t TransitionTable,
}

impl Default for Scanner<'static> {
    fn default() -> Self {
        Self::new(transition_table())
    }
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t TransitionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t TransitionTable {
        self.table
    }

    /// Scan `input` completely. Never fails: characters no rule accepts
    /// become one-character ERROR tokens.
    pub fn scan(&self, input: &str) -> Scan {
        let mut cur = Cursor::new(input);
        let mut out = Scan::default();

        while let Some(c) = cur.peek() {
            if is_white(c) {
                cur.bump();
                continue;
            }

            let start = cur.pos;
            let line = cur.line;
            let column = cur.column();
            let mut rec = TraceRecorder::new(self.table);

            let rule = select_rule(c, cur.peek_next());
            match rule {
                Rule::String => scan_string(&mut cur, &mut rec),
                Rule::LineComment => scan_line_comment(&mut cur, &mut rec),
                Rule::Word => scan_word(&mut cur, &mut rec),
                Rule::Number => scan_number(&mut cur, &mut rec),
                Rule::Comparison => scan_comparison(&mut cur, &mut rec),
                Rule::Operator => scan_single(&mut cur, &mut rec, S::Operator),
                Rule::Delimiter => scan_single(&mut cur, &mut rec, S::Delimiter),
                Rule::Directive => scan_directive(&mut cur, &mut rec, start),
                Rule::Fallback => scan_single(&mut cur, &mut rec, S::Error),
            }
            debug_assert!(cur.pos > start, "rule {rule:?} made no progress at {start}");

            let lexeme = cur.slice(start, cur.pos);
            let kind = match rule {
                // `#name` is a keyword whether or not `name` is reserved.
                Rule::Directive => TokenKind::Keyword,
                _ => self.table.token_kind_for(rec.last_state(), lexeme),
            };

            out.tokens.push(Token {
                id: next_id("tok"),
                lexeme: lexeme.to_string(),
                kind,
                position: start,
                line,
                column,
            });
            out.traces.push(rec.into_trace(lexeme));
        }

        log::trace!(
            "scanned {} chars into {} tokens",
            cur.chars.len(),
            out.tokens.len()
        );
        out
    }
}

/// Scan with the process-wide reference table.
pub fn scan(input: &str) -> Scan {
    Scanner::default().scan(input)
}

fn scan_string(cur: &mut Cursor<'_>, rec: &mut TraceRecorder<'_>) {
    let Some(quote) = cur.bump() else { return };
    rec.enter(S::StringBody, quote);
    while let Some(c) = cur.bump() {
        if c == quote {
            rec.enter(S::StringDone, c);
            return;
        }
        rec.enter(S::StringBody, c);
    }
    // Unterminated: accept whatever was consumed.
    rec.finish(S::StringDone);
}

fn scan_line_comment(cur: &mut Cursor<'_>, rec: &mut TraceRecorder<'_>) {
    cur.bump();
    rec.enter(S::Slash, '/');
    cur.bump();
    rec.enter(S::Comment, '/');
    while cur.peek().is_some_and(|c| c != '\n') {
        cur.bump();
    }
}

fn scan_word(cur: &mut Cursor<'_>, rec: &mut TraceRecorder<'_>) {
    while let Some(c) = cur.peek().filter(|&c| is_letter(c) || is_digit(c)) {
        cur.bump();
        rec.enter(S::Letter, c);
    }
    rec.finish(S::IdentDone);
}

fn scan_number(cur: &mut Cursor<'_>, rec: &mut TraceRecorder<'_>) {
    while let Some(c) = cur.peek().filter(|&c| is_digit(c)) {
        cur.bump();
        rec.enter(S::Digit, c);
    }
    if cur.peek() != Some('.') {
        rec.finish(S::IntDone);
        return;
    }
    cur.bump();
    rec.enter(S::DotAfterDigit, '.');
    while let Some(c) = cur.peek().filter(|&c| is_digit(c)) {
        cur.bump();
        rec.enter(S::DotAfterDigit, c);
    }
    rec.finish(S::FloatDone);
}

// At most two characters: `=` `<` `>` `!`, optionally followed by `=`.
fn scan_comparison(cur: &mut Cursor<'_>, rec: &mut TraceRecorder<'_>) {
    if let Some(c) = cur.bump() {
        rec.enter(S::Comparison, c);
    }
    if cur.peek() == Some('=') {
        cur.bump();
        rec.enter(S::Comparison, '=');
    }
}

fn scan_single(cur: &mut Cursor<'_>, rec: &mut TraceRecorder<'_>, state: S) {
    if let Some(c) = cur.bump() {
        rec.enter(state, c);
    }
}

fn scan_directive(cur: &mut Cursor<'_>, rec: &mut TraceRecorder<'_>, start: usize) {
    cur.bump();
    while cur.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
        cur.bump();
    }
    rec.enter_with(S::IdentDone, cur.slice(start, cur.pos));
}
