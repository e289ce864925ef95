//! Unit tests for the scanner primitives.

use super::{
    classes::{is_expression, is_identifier, is_not_horizontal_space, is_word},
    scanner::Scanner,
};
use crate::errors::errors::ErrorImpl;

#[test]
fn test_skip_space_stops_at_newline() {
    let mut scanner = Scanner::new(" \t \nx", 0);
    scanner.skip_space();

    assert_eq!(scanner.pos(), 3);
    assert_eq!(scanner.start(), 3);
    assert_eq!(scanner.at(), Some('\n'));
}

#[test]
fn test_read_run_skips_then_reads() {
    let mut scanner = Scanner::new("  foo bar", 0);

    assert_eq!(scanner.read_run(is_not_horizontal_space), "foo");
    assert_eq!(scanner.read_run(is_not_horizontal_space), "bar");
    assert_eq!(scanner.read_run(is_not_horizontal_space), "");
    assert!(scanner.at_eof());
}

#[test]
fn test_read_run_word_class() {
    let mut scanner = Scanner::new("\n;; let\tx", 0);

    assert_eq!(scanner.read_run(is_word), "let");
    assert_eq!(scanner.read_run(is_identifier), "x");
}

#[test]
fn test_read_run_expression_class() {
    let mut scanner = Scanner::new("a + b, c", 0);

    assert_eq!(scanner.read_run(is_expression), "a + b");
    assert_eq!(scanner.at(), Some(','));
}

#[test]
fn test_read_quoted_empty() {
    let mut scanner = Scanner::new("'' rest", 0);

    assert_eq!(scanner.read_quoted('\''), "''");
    assert_eq!(scanner.pos(), 2);
}

#[test]
fn test_read_quoted_escaped_quote() {
    let mut scanner = Scanner::new(r#""say \"hi\"" tail"#, 0);

    assert_eq!(scanner.read_quoted('"'), r#""say \"hi\"""#);
}

#[test]
fn test_read_quoted_single_level_escape() {
    // The backslash before the second quote is itself escaped, but only one
    // character of lookback is taken into account.
    let mut scanner = Scanner::new(r#""a\\" b" c"#, 0);

    assert_eq!(scanner.read_quoted('"'), r#""a\\" b""#);
}

#[test]
fn test_read_quoted_unterminated_runs_to_end() {
    let mut scanner = Scanner::new("`open", 0);

    assert_eq!(scanner.read_quoted('`'), "`open");
    assert!(scanner.at_eof());
}

#[test]
fn test_read_balanced_nested() {
    let mut scanner = Scanner::new("(a, (b, c)) + d", 0);

    assert_eq!(scanner.read_balanced('(', ')').unwrap(), "(a, (b, c))");
    assert_eq!(scanner.pos(), 11);
}

#[test]
fn test_read_balanced_ignores_quoted_brackets() {
    let mut scanner = Scanner::new(r#"{ a: "}", b: '{', c: `}}` }"#, 0);

    assert_eq!(
        scanner.read_balanced('{', '}').unwrap(),
        r#"{ a: "}", b: '{', c: `}}` }"#
    );
    assert!(scanner.at_eof());
}

#[test]
fn test_read_balanced_unterminated() {
    let mut scanner = Scanner::new("xx[1, [2]", 5);
    scanner.advance_n(2);

    let error = scanner.read_balanced('[', ']').unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnterminatedStructure {
            open: '[',
            close: ']'
        }
    );
    assert_eq!(error.get_position().0, 7);
}

#[test]
fn test_read_balanced_open_quote_inside() {
    let mut scanner = Scanner::new("(\"a)", 0);

    assert!(scanner.read_balanced('(', ')').is_err());
}

#[test]
fn test_read_expression_dispatch() {
    let mut scanner = Scanner::new("  [1, 2], 'x, y', plain text;", 0);

    assert_eq!(scanner.read_expression().unwrap(), "[1, 2]");
    scanner.advance_n(1);
    assert_eq!(scanner.read_expression().unwrap(), "'x, y'");
    scanner.advance_n(1);
    assert_eq!(scanner.read_expression().unwrap(), "plain text");
    assert_eq!(scanner.at(), Some(';'));
}

#[test]
fn test_character_offsets() {
    let mut scanner = Scanner::new("é 'ü' x", 10);
    scanner.read_run(is_not_horizontal_space);
    scanner.skip_space();

    assert_eq!(scanner.read_quoted('\''), "'ü'");
    assert_eq!(scanner.absolute(scanner.pos()), 15);
}
