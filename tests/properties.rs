//! Property tests: the scan is total and loses nothing, for any input.

use lexiscan::{
    analyze,
    dev::check::check_scan,
    lexer::{TokenKind, scan, tables::ALL_KINDS, transition_table},
};
use proptest::prelude::*;

// Characters weighted toward the ones the rules care about.
fn lexical_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => proptest::char::range('a', 'z'),
        1 => proptest::char::range('A', 'Z'),
        2 => proptest::char::range('0', '9'),
        3 => proptest::sample::select(vec![
            ' ', '\t', '\n', '\r', '_', '.', '"', '\'', '/', '#', '=', '<', '>', '!', '+', '-',
            '*', '%', '&', '|', '^', '~', '(', ')', '{', '}', '[', ']', ';', ',', ':', '@', '\\',
        ]),
        1 => any::<char>(),
    ]
}

fn lexical_string() -> impl Strategy<Value = String> {
    proptest::collection::vec(lexical_char(), 0..200).prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn scan_is_total_and_structurally_sound(src in lexical_string()) {
        let out = scan(&src);
        prop_assert_eq!(check_scan(transition_table(), &src, &out), Ok(()));
    }

    #[test]
    fn arbitrary_unicode_never_breaks_the_scan(src in any::<String>()) {
        let out = scan(&src);
        prop_assert_eq!(check_scan(transition_table(), &src, &out), Ok(()));
    }

    #[test]
    fn positions_strictly_increase(src in lexical_string()) {
        let out = scan(&src);
        for pair in out.tokens.windows(2) {
            prop_assert!(pair[0].position < pair[1].position);
        }
    }

    #[test]
    fn whitespace_only_yields_nothing(src in "[ \t\r\n]{0,40}") {
        prop_assert_eq!(scan(&src).tokens.len(), 0);
    }

    #[test]
    fn histogram_sums_to_token_count(src in lexical_string()) {
        let r = analyze(&src);
        prop_assert_eq!(r.token_stats.total(), r.total_tokens);
        for (kind, n) in r.token_stats.iter() {
            prop_assert!(ALL_KINDS.contains(&kind));
            prop_assert!(n > 0);
        }
    }

    #[test]
    fn identifier_shaped_words_classify_by_keyword_set(w in "[A-Za-z_][A-Za-z0-9_]{0,10}") {
        let out = scan(&w);
        prop_assert_eq!(out.tokens.len(), 1);
        let want = if transition_table().is_keyword(&w) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        prop_assert_eq!(out.tokens[0].kind, want);
        prop_assert_eq!(&out.tokens[0].lexeme, &w);
    }

    #[test]
    fn error_tokens_are_exactly_one_char(src in lexical_string()) {
        for t in scan(&src).tokens.iter().filter(|t| t.kind == TokenKind::Error) {
            prop_assert_eq!(t.lexeme.chars().count(), 1);
        }
    }
}
