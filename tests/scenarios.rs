//! Token streams for representative inputs.

use lexiscan::{
    analyze,
    lexer::{TokenKind, scan, tables::keywords::REFERENCE_KEYWORDS},
};
use pretty_assertions::assert_eq;

use TokenKind::{
    Comment, Comparison, Delimiter, Error, Float, Identifier, Integer, Keyword, Operator,
};

fn kinds(src: &str) -> Vec<(TokenKind, String)> {
    scan(src)
        .tokens
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

fn toks(pairs: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    pairs.iter().map(|&(k, s)| (k, s.to_string())).collect()
}

#[test]
fn declaration() {
    let r = analyze("int x = 42;");
    let got: Vec<(TokenKind, String)> =
        r.tokens.iter().map(|t| (t.kind, t.lexeme.clone())).collect();
    assert_eq!(
        got,
        toks(&[
            (Keyword, "int"),
            (Identifier, "x"),
            (Comparison, "="),
            (Integer, "42"),
            (Delimiter, ";"),
        ])
    );
    assert_eq!(r.total_tokens, 5);
}

#[test]
fn float_literal() {
    assert_eq!(kinds("3.14"), toks(&[(Float, "3.14")]));
}

#[test]
fn trailing_dot_is_still_a_float() {
    assert_eq!(kinds("3."), toks(&[(Float, "3.")]));
    assert_eq!(kinds("3.;"), toks(&[(Float, "3."), (Delimiter, ";")]));
}

#[test]
fn second_dot_starts_a_delimiter() {
    assert_eq!(
        kinds("1.2.3"),
        toks(&[(Float, "1.2"), (Delimiter, "."), (Integer, "3")])
    );
}

#[test]
fn leading_dot_is_a_delimiter() {
    assert_eq!(kinds(".5"), toks(&[(Delimiter, "."), (Integer, "5")]));
}

#[test]
fn comment_then_identifier() {
    assert_eq!(
        kinds("// comment\nx"),
        toks(&[(Comment, "// comment"), (Identifier, "x")])
    );
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(kinds("a //"), toks(&[(Identifier, "a"), (Comment, "//")]));
}

#[test]
fn unterminated_string_runs_to_eof() {
    assert_eq!(kinds("\"unterminated"), toks(&[(TokenKind::String, "\"unterminated")]));
}

#[test]
fn unknown_char_is_error() {
    assert_eq!(kinds("@"), toks(&[(Error, "@")]));
}

#[test]
fn chained_comparisons() {
    assert_eq!(
        kinds("a==b!=c"),
        toks(&[
            (Identifier, "a"),
            (Comparison, "=="),
            (Identifier, "b"),
            (Comparison, "!="),
            (Identifier, "c"),
        ])
    );
}

#[test]
fn comparison_is_bounded_to_two_chars() {
    assert_eq!(kinds("===="), toks(&[(Comparison, "=="), (Comparison, "==")]));
    assert_eq!(kinds("==="), toks(&[(Comparison, "=="), (Comparison, "=")]));
    assert_eq!(kinds("<>"), toks(&[(Comparison, "<"), (Comparison, ">")]));
    assert_eq!(kinds("!=="), toks(&[(Comparison, "!="), (Comparison, "=")]));
}

#[test]
fn empty_input() {
    let r = analyze("");
    assert_eq!(r.total_tokens, 0);
    assert!(r.tokens.is_empty());
}

#[test]
fn whitespace_only_input() {
    assert!(scan(" \t\r\n \n").tokens.is_empty());
}

#[test]
fn operators_are_single_chars() {
    assert_eq!(
        kinds("a+=b&&c"),
        toks(&[
            (Identifier, "a"),
            (Operator, "+"),
            (Comparison, "="),
            (Identifier, "b"),
            (Operator, "&"),
            (Operator, "&"),
            (Identifier, "c"),
        ])
    );
    assert_eq!(kinds("a/b"), toks(&[(Identifier, "a"), (Operator, "/"), (Identifier, "b")]));
}

#[test]
fn identifiers_with_digits_and_underscores() {
    assert_eq!(
        kinds("_tmp1 x2y 9lives"),
        toks(&[
            (Identifier, "_tmp1"),
            (Identifier, "x2y"),
            (Integer, "9"),
            (Identifier, "lives"),
        ])
    );
}

#[test]
fn mixed_case_keywords_are_keywords() {
    assert_eq!(
        kinds("INT If wHiLe"),
        toks(&[(Keyword, "INT"), (Keyword, "If"), (Keyword, "wHiLe")])
    );
}

#[test]
fn every_reserved_word_alone_is_a_keyword() {
    for &w in REFERENCE_KEYWORDS {
        assert_eq!(kinds(w), toks(&[(Keyword, w)]), "{w}");
    }
}

#[test]
fn near_keywords_are_identifiers() {
    for w in ["integer", "iff", "whiles", "_int", "int_", "Printf2"] {
        assert_eq!(kinds(w), toks(&[(Identifier, w)]), "{w}");
    }
}

#[test]
fn small_c_program() {
    let src = "#include <stdio.h>\nint main() {\n    printf(\"%d\", 1.5);\n}\n";
    assert_eq!(
        kinds(src),
        toks(&[
            (Keyword, "#include"),
            (Comparison, "<"),
            (Identifier, "stdio"),
            (Delimiter, "."),
            (Identifier, "h"),
            (Comparison, ">"),
            (Keyword, "int"),
            (Keyword, "main"),
            (Delimiter, "("),
            (Delimiter, ")"),
            (Delimiter, "{"),
            (Keyword, "printf"),
            (Delimiter, "("),
            (TokenKind::String, "\"%d\""),
            (Delimiter, ","),
            (Float, "1.5"),
            (Delimiter, ")"),
            (Delimiter, ";"),
            (Delimiter, "}"),
        ])
    );
}

#[test]
fn positions_lines_and_columns() {
    let out = scan("a\n  bc\n\n\td");
    let got: Vec<(usize, usize, usize)> = out
        .tokens
        .iter()
        .map(|t| (t.position, t.line, t.column))
        .collect();
    assert_eq!(got, vec![(0, 1, 1), (4, 2, 3), (9, 4, 2)]);
}

#[test]
fn positions_count_chars_not_bytes() {
    let out = scan("\"é\" x");
    assert_eq!(out.tokens[1].position, 4);
    assert_eq!(out.tokens[1].column, 5);
}

#[test]
fn multi_line_string_moves_following_lines() {
    let out = scan("'a\nb' c");
    assert_eq!(out.tokens[1].lexeme, "c");
    assert_eq!((out.tokens[1].line, out.tokens[1].column), (2, 4));
}

#[test]
fn token_ids_are_unique() {
    let out = scan("a b c d e");
    let mut ids: Vec<&str> = out.tokens.iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn histogram_matches_tokens() {
    let r = analyze("x = x + 1.0; // inc");
    assert_eq!(r.token_stats.get(Identifier), 2);
    assert_eq!(r.token_stats.get(Float), 1);
    assert_eq!(r.token_stats.get(Comment), 1);
    assert_eq!(r.token_stats.get(Keyword), 0);
    assert_eq!(r.token_stats.total(), r.total_tokens);
}
