// src/lexer/tables/dfa.rs
use std::{fmt, str::FromStr};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

// DFA states (small hand-built DFA). The wire id of each state is `q<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum S {
    Start,
    Letter,
    Digit,
    IdentDone,
    IntDone,
    DotAfterDigit,
    FloatDone,
    Operator,
    Delimiter,
    StringBody,
    StringDone,
    Comparison,
    Slash,
    Comment,
    Error,
}

pub const N_STATES: usize = 15;
pub const START: S = S::Start;

pub const ALL_STATES: [S; N_STATES] = [
    S::Start,
    S::Letter,
    S::Digit,
    S::IdentDone,
    S::IntDone,
    S::DotAfterDigit,
    S::FloatDone,
    S::Operator,
    S::Delimiter,
    S::StringBody,
    S::StringDone,
    S::Comparison,
    S::Slash,
    S::Comment,
    S::Error,
];

const IDS: [&str; N_STATES] = [
    "q0", "q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10", "q11", "q12", "q13",
    "q14",
];

impl S {
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        IDS[self.idx()]
    }

    pub fn from_id(id: &str) -> Option<S> {
        IDS.iter().position(|&s| s == id).map(|i| ALL_STATES[i])
    }
}

impl fmt::Display for S {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for S {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        S::from_id(s).ok_or_else(|| format!("unknown state id `{s}`"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    Start,
    Intermediate,
    Accepting,
    Error,
}

/// Kind and label of every state in the reference automaton.
pub const REFERENCE_STATES: [(S, StateKind, &str); N_STATES] = [
    (S::Start, StateKind::Start, "Start"),
    (S::Letter, StateKind::Intermediate, "Letter"),
    (S::Digit, StateKind::Intermediate, "Digit"),
    (S::IdentDone, StateKind::Accepting, "Identifier/Keyword"),
    (S::IntDone, StateKind::Accepting, "Integer"),
    (S::DotAfterDigit, StateKind::Intermediate, "Dot after Digit"),
    (S::FloatDone, StateKind::Accepting, "Float"),
    (S::Operator, StateKind::Accepting, "Operator"),
    (S::Delimiter, StateKind::Accepting, "Delimiter"),
    (S::StringBody, StateKind::Intermediate, "String Start"),
    (S::StringDone, StateKind::Accepting, "String"),
    (S::Comparison, StateKind::Accepting, "Comparison/Assignment"),
    (S::Slash, StateKind::Intermediate, "Slash"),
    (S::Comment, StateKind::Accepting, "Comment"),
    (S::Error, StateKind::Error, "Error"),
];

/// Lookup key for a transition row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputClass {
    Letter,
    Digit,
    Char(char),
    Other,
}

impl fmt::Display for InputClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputClass::Letter => f.write_str("letter"),
            InputClass::Digit => f.write_str("digit"),
            InputClass::Other => f.write_str("other"),
            InputClass::Char(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for InputClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "letter" => Ok(InputClass::Letter),
            "digit" => Ok(InputClass::Digit),
            "other" => Ok(InputClass::Other),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(InputClass::Char(c)),
                    _ => Err(format!("`{s}` is neither a class name nor a single character")),
                }
            }
        }
    }
}

#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
#[inline]
pub fn is_white(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Map a raw character to the key used for table lookup.
#[inline]
pub fn classify(c: char) -> InputClass {
    if is_letter(c) {
        InputClass::Letter
    } else if is_digit(c) {
        InputClass::Digit
    } else {
        InputClass::Char(c)
    }
}

pub type Row = HashMap<InputClass, S>;

/// Transition rows of the reference automaton, indexed by `S::idx()`.
pub fn reference_rows() -> Vec<Row> {
    let mut rows: Vec<Row> = vec![Row::new(); N_STATES];

    fn set(rows: &mut [Row], from: S, chars: &str, to: S) {
        for c in chars.chars() {
            rows[from.idx()].insert(InputClass::Char(c), to);
        }
    }
    fn set_class(rows: &mut [Row], from: S, class: InputClass, to: S) {
        rows[from.idx()].insert(class, to);
    }

    // Start
    set_class(&mut rows, S::Start, InputClass::Letter, S::Letter);
    set_class(&mut rows, S::Start, InputClass::Digit, S::Digit);
    set(&mut rows, S::Start, "+-*%&|^~", S::Operator);
    set(&mut rows, S::Start, "/", S::Slash);
    set(&mut rows, S::Start, "(){}[];,.:", S::Delimiter);
    set(&mut rows, S::Start, "\"'", S::StringBody);
    set(&mut rows, S::Start, "=<>!", S::Comparison);
    set(&mut rows, S::Start, " \t\n\r", S::Start);
    set_class(&mut rows, S::Start, InputClass::Other, S::Error);

    // Identifier
    set_class(&mut rows, S::Letter, InputClass::Letter, S::Letter);
    set_class(&mut rows, S::Letter, InputClass::Digit, S::Letter);
    set_class(&mut rows, S::Letter, InputClass::Other, S::IdentDone);

    // Numbers
    set_class(&mut rows, S::Digit, InputClass::Digit, S::Digit);
    set(&mut rows, S::Digit, ".", S::DotAfterDigit);
    set_class(&mut rows, S::Digit, InputClass::Other, S::IntDone);
    set_class(&mut rows, S::DotAfterDigit, InputClass::Digit, S::DotAfterDigit);
    set_class(&mut rows, S::DotAfterDigit, InputClass::Other, S::FloatDone);

    // Strings
    set(&mut rows, S::StringBody, "\"'", S::StringDone);
    set_class(&mut rows, S::StringBody, InputClass::Other, S::StringBody);

    // Comparison/assignment: the scanner bounds this to two characters.
    set(&mut rows, S::Comparison, "=", S::Comparison);
    set_class(&mut rows, S::Comparison, InputClass::Other, S::Comparison);

    // Slash / comments
    set(&mut rows, S::Slash, "/", S::Comment);
    set_class(&mut rows, S::Slash, InputClass::Other, S::Operator);
    set(&mut rows, S::Comment, "\n", S::Comment);
    set_class(&mut rows, S::Comment, InputClass::Other, S::Comment);

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for s in ALL_STATES {
            assert_eq!(S::from_id(s.id()), Some(s));
        }
        assert_eq!(S::from_id("q15"), None);
        assert_eq!(S::Error.id(), "q14");
    }

    #[test]
    fn classify_letters_digits_and_literals() {
        assert_eq!(classify('a'), InputClass::Letter);
        assert_eq!(classify('Z'), InputClass::Letter);
        assert_eq!(classify('_'), InputClass::Letter);
        assert_eq!(classify('7'), InputClass::Digit);
        assert_eq!(classify('.'), InputClass::Char('.'));
        assert_eq!(classify('é'), InputClass::Char('é'));
    }

    #[test]
    fn input_class_parses_names_and_single_chars() {
        assert_eq!("letter".parse::<InputClass>(), Ok(InputClass::Letter));
        assert_eq!("other".parse::<InputClass>(), Ok(InputClass::Other));
        assert_eq!("=".parse::<InputClass>(), Ok(InputClass::Char('=')));
        assert_eq!("\n".parse::<InputClass>(), Ok(InputClass::Char('\n')));
        assert!("==".parse::<InputClass>().is_err());
        assert!("".parse::<InputClass>().is_err());
    }

    #[test]
    fn reference_states_are_in_index_order() {
        for (i, (s, _, _)) in REFERENCE_STATES.iter().enumerate() {
            assert_eq!(s.idx(), i);
        }
        let starts = REFERENCE_STATES
            .iter()
            .filter(|(_, k, _)| *k == StateKind::Start)
            .count();
        assert_eq!(starts, 1);
    }
}
