// src/dev/generator.rs
//! Random C-like source for fuzzing and benchmarks.
//!
//! Output mixes every token class the scanner knows, including malformed
//! pieces (stray characters, unterminated strings at the very end), and
//! always reaches at least `target_len` bytes.

use rand::Rng;

use crate::lexer::tables::keywords::REFERENCE_KEYWORDS;

const OPERATORS: &[&str] = &["+", "-", "*", "/", "%", "&", "|", "^", "~"];
const COMPARISONS: &[&str] = &["=", "==", "<", "<=", ">", ">=", "!", "!="];
const DELIMITERS: &[&str] = &["(", ")", "{", "}", "[", "]", ";", ",", ".", ":"];
const DIRECTIVES: &[&str] = &["#include", "#define", "#ifdef", "#endif", "#pragma"];
const STRAYS: &[char] = &['@', '$', '`', '\\', '?', 'λ', '€'];
const WHITES: &[char] = &[' ', ' ', ' ', '\t', '\n', '\r'];

const IDENT_HEAD: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_";
const IDENT_TAIL: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_0123456789";

fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

fn push_ident<R: Rng>(rng: &mut R, out: &mut String) {
    out.push(*pick(rng, IDENT_HEAD) as char);
    for _ in 0..rng.random_range(0..8) {
        out.push(*pick(rng, IDENT_TAIL) as char);
    }
}

fn push_keyword<R: Rng>(rng: &mut R, out: &mut String) {
    let kw = *pick(rng, REFERENCE_KEYWORDS);
    if rng.random_bool(0.2) {
        out.push_str(&kw.to_ascii_uppercase());
    } else {
        out.push_str(kw);
    }
}

fn push_number<R: Rng>(rng: &mut R, out: &mut String) {
    out.push_str(&rng.random_range(0u32..100_000).to_string());
    if rng.random_bool(0.3) {
        out.push('.');
        if rng.random_bool(0.8) {
            out.push_str(&rng.random_range(0u32..1000).to_string());
        }
    }
}

fn push_string<R: Rng>(rng: &mut R, out: &mut String) {
    let quote = if rng.random_bool(0.5) { '"' } else { '\'' };
    let other = if quote == '"' { '\'' } else { '"' };
    out.push(quote);
    for _ in 0..rng.random_range(0..12) {
        match rng.random_range(0u32..10) {
            0 => out.push(other),
            1 => out.push('\\'),
            2 => out.push('\n'),
            _ => out.push(*pick(rng, IDENT_TAIL) as char),
        }
    }
    out.push(quote);
}

fn push_line_comment<R: Rng>(rng: &mut R, out: &mut String) {
    out.push_str("//");
    for _ in 0..rng.random_range(0..24) {
        let c = if rng.random_bool(0.15) {
            *pick(rng, STRAYS)
        } else {
            *pick(rng, IDENT_TAIL) as char
        };
        out.push(c);
    }
    out.push('\n');
}

fn push_ws<R: Rng>(rng: &mut R, out: &mut String) {
    for _ in 0..rng.random_range(1..4) {
        out.push(*pick(rng, WHITES));
    }
}

pub fn gen_source<R: Rng>(rng: &mut R, target_len: usize) -> String {
    let mut out = String::with_capacity(target_len + target_len / 8);

    while out.len() < target_len {
        let roll = rng.random_range(0u32..100);

        match roll {
            0..=19 => push_ident(rng, &mut out),
            20..=27 => push_keyword(rng, &mut out),
            28..=37 => push_number(rng, &mut out),
            38..=42 => push_string(rng, &mut out),
            43..=46 => push_line_comment(rng, &mut out),
            47..=54 => out.push_str(*pick(rng, OPERATORS)),
            55..=62 => out.push_str(*pick(rng, COMPARISONS)),
            63..=72 => out.push_str(*pick(rng, DELIMITERS)),
            73..=74 => out.push_str(*pick(rng, DIRECTIVES)),
            75..=76 => out.push(*pick(rng, STRAYS)),
            77..=99 => push_ws(rng, &mut out),
            _ => unreachable!(),
        }
    }

    // Occasionally leave a dangling string so EOF handling gets exercised.
    if rng.random_bool(0.1) {
        out.push_str(" \"open");
    }
    out
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn reaches_target_len_and_is_seed_stable() {
        let a = gen_source(&mut StdRng::seed_from_u64(7), 500);
        let b = gen_source(&mut StdRng::seed_from_u64(7), 500);
        assert!(a.len() >= 500);
        assert_eq!(a, b);
    }

    #[test]
    fn emits_every_punctuation_family() {
        let s = gen_source(&mut StdRng::seed_from_u64(11), 20_000);
        assert!(DIRECTIVES.iter().any(|d| s.contains(d)));
        assert!(OPERATORS.iter().any(|o| s.contains(o)));
        assert!(s.contains("==") || s.contains("<=") || s.contains(">=") || s.contains("!="));
        assert!(s.contains(';') && s.contains('('));
    }
}
