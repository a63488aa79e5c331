// src/lexer/stats.rs
use std::{collections::BTreeMap, fmt::Write as _};

use hashbrown::HashMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::lexer::{
    scan::Token,
    tables::{ALL_KINDS, TokenKind},
};

/// Token kind -> number of occurrences. Kinds that never occurred are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenStats(HashMap<TokenKind, usize>);

// Unknown kind names fold into ERROR; their counts add up instead of
// overwriting each other.
impl<'de> Deserialize<'de> for TokenStats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, usize>::deserialize(deserializer)?;
        let mut counts = HashMap::new();
        for (name, n) in raw {
            *counts.entry(TokenKind::from_wire(&name)).or_insert(0) += n;
        }
        Ok(Self(counts))
    }
}

impl TokenStats {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts = HashMap::new();
        for t in tokens {
            *counts.entry(t.kind).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn get(&self, kind: TokenKind) -> usize {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present kinds in the fixed display order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        ALL_KINDS
            .iter()
            .filter_map(|&k| self.0.get(&k).map(|&n| (k, n)))
    }

    /// Plain-text breakdown, one line per present kind.
    pub fn render(&self) -> String {
        let total = self.total();
        let mut out = String::new();
        let _ = writeln!(out, "{total} tokens");
        for (kind, n) in self.iter() {
            let share = if total == 0 {
                0.0
            } else {
                100.0 * n as f64 / total as f64
            };
            let _ = writeln!(out, "  {:<11} {n:>6}  {share:5.1}%", kind.as_str());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan::scan;

    #[test]
    fn counts_only_present_kinds() {
        let stats = TokenStats::from_tokens(&scan("x = y + 1;").tokens);
        assert_eq!(stats.get(TokenKind::Identifier), 2);
        assert_eq!(stats.get(TokenKind::Comparison), 1);
        assert_eq!(stats.get(TokenKind::Operator), 1);
        assert_eq!(stats.get(TokenKind::Integer), 1);
        assert_eq!(stats.get(TokenKind::Delimiter), 1);
        assert_eq!(stats.get(TokenKind::Float), 0);
        assert_eq!(stats.len(), 5);
        assert_eq!(stats.total(), 6);
    }

    #[test]
    fn serializes_as_flat_map() {
        let stats = TokenStats::from_tokens(&scan("a b").tokens);
        let v = serde_json::to_value(&stats).unwrap();
        assert_eq!(v, serde_json::json!({ "IDENTIFIER": 2 }));
    }

    #[test]
    fn unknown_kinds_fold_into_error() {
        let stats: TokenStats =
            serde_json::from_str(r#"{"ERROR": 1, "HEX_LITERAL": 2, "WIDE_CHAR": 3, "INTEGER": 4}"#)
                .unwrap();
        assert_eq!(stats.get(TokenKind::Error), 6);
        assert_eq!(stats.get(TokenKind::Integer), 4);
        assert_eq!(stats.total(), 10);
    }

    #[test]
    fn render_lists_kinds_in_display_order() {
        let stats = TokenStats::from_tokens(&scan("1 x").tokens);
        let text = stats.render();
        let ident = text.find("IDENTIFIER").unwrap();
        let int = text.find("INTEGER").unwrap();
        assert!(ident < int);
        assert!(text.starts_with("2 tokens"));
    }
}
