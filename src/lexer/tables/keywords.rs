// src/lexer/tables/keywords.rs
use std::str::FromStr;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

pub const REFERENCE_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while", "class", "public", "private", "protected", "virtual", "template",
    "namespace", "using", "try", "catch", "throw", "new", "delete", "this", "true", "false",
    "null", "nullptr", "bool", "string", "include", "define", "ifdef", "ifndef", "endif",
    "pragma", "var", "let", "function", "console", "log", "printf", "scanf", "main", "import",
    "from", "export", "async", "await",
];

/// How identifier lexemes are compared against the keyword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    /// ASCII case is folded before lookup: `INT` and `If` are keywords.
    #[default]
    Insensitive,
    Exact,
}

impl FromStr for KeywordCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "insensitive" => Ok(KeywordCase::Insensitive),
            "exact" | "sensitive" => Ok(KeywordCase::Exact),
            _ => Err(format!("unknown keyword case policy `{s}` (want exact|insensitive)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeywordSet {
    // Words in declaration order, as written in the definition.
    words: Vec<String>,
    // Lookup set; lower-cased when the policy is `Insensitive`.
    lookup: HashSet<String>,
    case: KeywordCase,
}

impl KeywordSet {
    pub fn new<I, W>(words: I, case: KeywordCase) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let lookup = Self::build_lookup(&words, case);
        Self {
            words,
            lookup,
            case,
        }
    }

    pub fn reference() -> Self {
        Self::new(REFERENCE_KEYWORDS.iter().copied(), KeywordCase::default())
    }

    fn build_lookup(words: &[String], case: KeywordCase) -> HashSet<String> {
        match case {
            KeywordCase::Exact => words.iter().cloned().collect(),
            KeywordCase::Insensitive => words.iter().map(|w| w.to_ascii_lowercase()).collect(),
        }
    }

    pub fn with_case(mut self, case: KeywordCase) -> Self {
        if case != self.case {
            self.lookup = Self::build_lookup(&self.words, case);
            self.case = case;
        }
        self
    }

    pub fn case(&self) -> KeywordCase {
        self.case
    }

    pub fn contains(&self, lexeme: &str) -> bool {
        match self.case {
            KeywordCase::Exact => self.lookup.contains(lexeme),
            KeywordCase::Insensitive => self.lookup.contains(&lexeme.to_ascii_lowercase()),
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
