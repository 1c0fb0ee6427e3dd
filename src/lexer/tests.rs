//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Digits, variables, operators and parentheses
//! - Whitespace handling and source positions
//! - Error cases

use crate::errors::errors::{ErrorCategory, ErrorImpl};

use super::{lexer::tokenize, tokens::{render_tokens, TokenKind}};

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("0 7 9").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].number, Some(0.0));
    assert_eq!(tokens[1].number, Some(7.0));
    assert_eq!(tokens[2].value, "9");
    assert_eq!(tokens[2].number, Some(9.0));
}

#[test]
fn test_multi_digit_run_is_split() {
    let tokens = tokenize("42").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].number, Some(4.0));
    assert_eq!(tokens[1].number, Some(2.0));
}

#[test]
fn test_tokenize_variables() {
    let tokens = tokenize("A Z").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].value, "A");
    assert_eq!(tokens[0].number, None);
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].symbol(), 'Z');
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * /").unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Operator));
    assert_eq!(render_tokens(&tokens), "+-*/");
}

#[test]
fn test_tokenize_parentheses() {
    let tokens = tokenize("(1)").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[2].kind, TokenKind::CloseParen);
}

#[test]
fn test_tokenize_expression() {
    let tokens = tokenize("3+4*(2-A)").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::Operator,
            TokenKind::OpenParen,
            TokenKind::Number,
            TokenKind::Operator,
            TokenKind::Variable,
            TokenKind::CloseParen,
        ]
    );
}

#[test]
fn test_positions_count_whitespace() {
    let tokens = tokenize(" 1 +\t2").unwrap();

    assert_eq!(tokens[0].span.start.0, 1);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 6);
}

#[test]
fn test_whitespace_only_yields_no_tokens() {
    assert!(tokenize("  \n\t ").unwrap().is_empty());
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn test_round_trip_text() {
    let tokens = tokenize(" ( 1 + B ) * 3 ").unwrap();

    assert_eq!(render_tokens(&tokens), "(1+B)*3");
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("1+#").unwrap_err();

    assert_eq!(error.category(), ErrorCategory::Lexical);
    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: '#' });
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_lowercase_variable_is_rejected() {
    let error = tokenize("a+1").unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: 'a' });
}

#[test]
fn test_decimal_point_is_rejected() {
    let error = tokenize("1.5").unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: '.' });
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_non_ascii_position_is_in_characters() {
    let error = tokenize("é+1").unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: 'é' });
    assert_eq!(error.get_position().0, 0);

    let error = tokenize("1+1é").unwrap_err();
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_long_input_is_tokenized_whole() {
    let source = format!("{}1", "1 + ".repeat(25_000));
    assert_eq!(source.chars().count(), 100_001);

    let tokens = tokenize(&source).unwrap();

    assert_eq!(tokens.len(), 50_001);
    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].span.start.0, 2);
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Number);
    assert_eq!(last.span.start.0, 100_000);
    assert_eq!(last.span.end.0, 100_001);
}

#[test]
fn test_long_input_reports_late_error_position() {
    let source = format!("{}é", "(".repeat(100_000));
    let error = tokenize(&source).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: 'é' });
    assert_eq!(error.get_position().0, 100_000);
}
