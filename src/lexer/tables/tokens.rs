// src/lexer/tables/tokens.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Token kinds emitted by the scanner. The wire names are the upper-case
/// spellings (`"KEYWORD"`, `"FLOAT"`, ...); reading an unknown name yields
/// `Error` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Float,
    Operator,
    Delimiter,
    String,
    Comparison,
    Comment,
    Error,
}

pub const ALL_KINDS: [TokenKind; 10] = [
    TokenKind::Keyword,
    TokenKind::Identifier,
    TokenKind::Integer,
    TokenKind::Float,
    TokenKind::Operator,
    TokenKind::Delimiter,
    TokenKind::String,
    TokenKind::Comparison,
    TokenKind::Comment,
    TokenKind::Error,
];

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        use TokenKind::*;
        match self {
            Keyword => "KEYWORD",
            Identifier => "IDENTIFIER",
            Integer => "INTEGER",
            Float => "FLOAT",
            Operator => "OPERATOR",
            Delimiter => "DELIMITER",
            String => "STRING",
            Comparison => "COMPARISON",
            Comment => "COMMENT",
            Error => "ERROR",
        }
    }

    /// Parse a wire name. Unknown names fall into `Error` so that older
    /// readers keep working when new kinds show up.
    pub fn from_wire(s: &str) -> TokenKind {
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .unwrap_or(TokenKind::Error)
    }

    pub fn description(self) -> &'static str {
        use TokenKind::*;
        match self {
            Keyword => "Reserved words",
            Identifier => "User-defined names",
            Integer => "Whole numbers",
            Float => "Decimal numbers",
            Operator => "Arithmetic/logic operators",
            Delimiter => "Punctuation & separators",
            String => "String literals",
            Comparison => "Comparison/assignment",
            Comment => "Comments",
            Error => "Unrecognized tokens",
        }
    }

    pub fn color(self) -> &'static str {
        use TokenKind::*;
        match self {
            Keyword => "#ff6b9d",
            Identifier => "#c084fc",
            Integer => "#67e8f9",
            Float => "#34d399",
            Operator => "#fbbf24",
            Delimiter => "#fb923c",
            String => "#a3e635",
            Comparison => "#f472b6",
            Comment => "#94a3b8",
            Error => "#ef4444",
        }
    }
}

impl<'de> Deserialize<'de> for TokenKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(TokenKind::from_wire(&name))
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the token-type catalogue served to display layers.
#[derive(Debug, Clone, Serialize)]
pub struct TokenTypeInfo {
    pub color: &'static str,
    pub description: &'static str,
}

/// Catalogue of every kind, in declaration order.
pub fn token_types() -> BTreeMap<TokenKind, TokenTypeInfo> {
    ALL_KINDS
        .iter()
        .map(|&k| {
            (
                k,
                TokenTypeInfo {
                    color: k.color(),
                    description: k.description(),
                },
            )
        })
        .collect()
}
