// src/dev/check.rs
//! Structural checks every scan must pass, whatever the input.

use crate::lexer::{
    Scan, TokenStats,
    tables::{StateKind, TransitionTable, dfa::is_white},
    trace::END_MARKER,
};

/// Verify `scan` against `src`; the error names the first violated property.
pub fn check_scan(table: &TransitionTable, src: &str, scan: &Scan) -> Result<(), String> {
    if scan.tokens.len() != scan.traces.len() {
        return Err(format!(
            "{} tokens but {} traces",
            scan.tokens.len(),
            scan.traces.len()
        ));
    }

    let chars: Vec<char> = src.chars().collect();
    let mut rebuilt = String::with_capacity(src.len());
    let mut at = 0usize;
    let mut line = 1usize;
    let mut line_start = 0usize;

    for (i, (tok, tr)) in scan.tokens.iter().zip(&scan.traces).enumerate() {
        if tok.position < at {
            return Err(format!("token #{i} at {} overlaps previous end {at}", tok.position));
        }
        if tok.position >= chars.len() {
            return Err(format!("token #{i} starts past the end of input"));
        }
        // Only whitespace may sit between tokens.
        for &c in &chars[at..tok.position] {
            if !is_white(c) {
                return Err(format!("token #{i}: non-whitespace {c:?} skipped"));
            }
            rebuilt.push(c);
        }
        for (k, &c) in chars.iter().enumerate().take(tok.position).skip(at) {
            if c == '\n' {
                line += 1;
                line_start = k + 1;
            }
        }
        if (tok.line, tok.column) != (line, tok.position - line_start + 1) {
            return Err(format!(
                "token #{i} {:?}: line/column {}:{} but expected {}:{}",
                tok.lexeme,
                tok.line,
                tok.column,
                line,
                tok.position - line_start + 1
            ));
        }

        let n = tok.lexeme.chars().count();
        if n == 0 {
            return Err(format!("token #{i} is empty"));
        }
        let end = tok.position + n;
        if end > chars.len() || chars[tok.position..end].iter().copied().ne(tok.lexeme.chars()) {
            return Err(format!("token #{i} lexeme {:?} does not match source", tok.lexeme));
        }
        for (k, &c) in chars.iter().enumerate().take(end).skip(tok.position) {
            if c == '\n' {
                line += 1;
                line_start = k + 1;
            }
        }
        rebuilt.push_str(&tok.lexeme);
        at = end;

        if tr.lexeme != tok.lexeme {
            return Err(format!("trace #{i} lexeme {:?} != {:?}", tr.lexeme, tok.lexeme));
        }
        if tr.path.len() < 2 {
            return Err(format!("trace #{i} has {} step(s)", tr.path.len()));
        }
        let first = &tr.path[0];
        if first.state != table.start() || !first.char.is_empty() {
            return Err(format!("trace #{i} does not open at the start state"));
        }
        let last = &tr.path[tr.path.len() - 1];
        if !matches!(table.kind_of(last.state), StateKind::Accepting | StateKind::Error) {
            return Err(format!("trace #{i} ends in non-final state {}", last.state));
        }
        if let Some(s) = tr.path[1..tr.path.len() - 1].iter().find(|s| s.char == END_MARKER) {
            return Err(format!("trace #{i} has {END_MARKER} before the last step at {}", s.state));
        }
    }

    for &c in &chars[at..] {
        if !is_white(c) {
            return Err(format!("trailing non-whitespace {c:?} was not tokenized"));
        }
        rebuilt.push(c);
    }
    if rebuilt != src {
        return Err("tokens and whitespace do not reconstruct the source".into());
    }

    let stats = TokenStats::from_tokens(&scan.tokens);
    if stats.total() != scan.tokens.len() {
        return Err(format!(
            "histogram sums to {} for {} tokens",
            stats.total(),
            scan.tokens.len()
        ));
    }
    Ok(())
}
