//! Unit tests for error handling.
//!
//! This module contains tests for error types, categories and tips.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, Position(10));

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.category(), ErrorCategory::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnexpectedToken { token: "*".to_string() }, Position(42));

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_syntax_error_categories() {
    let errors = vec![
        ErrorImpl::UnbalancedParentheses,
        ErrorImpl::MissingOperand { after: "+".to_string() },
        ErrorImpl::UnexpectedEnd,
        ErrorImpl::UnexpectedToken { token: "-".to_string() },
        ErrorImpl::TrailingTokens { token: "2".to_string() },
        ErrorImpl::NestingTooDeep { limit: 8 },
    ];

    for error_impl in errors {
        let error = Error::new(error_impl, Position::null());
        assert_eq!(error.category(), ErrorCategory::Syntax, "{}", error.get_error_name());
    }
}

#[test]
fn test_non_numeric_variable_error() {
    let error = Error::new(
        ErrorImpl::NonNumericVariable { variable: 'X', value: None },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "NonNumericVariable");
    assert_eq!(error.category(), ErrorCategory::Semantic);
    assert_eq!(error.to_string(), "non-numeric variable `X`");
}

#[test]
fn test_division_by_zero_error() {
    let error = Error::new(ErrorImpl::DivisionByZero, Position(3));

    assert_eq!(error.category(), ErrorCategory::Evaluation);
    assert_eq!(error.to_string(), "division by zero");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, Position(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NonNumericVariable { variable: 'B', value: Some("ten".to_string()) },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`B` was given `ten`, which is not a number"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_category_display() {
    assert_eq!(ErrorCategory::Lexical.to_string(), "LexicalError");
    assert_eq!(ErrorCategory::Syntax.to_string(), "SyntaxError");
    assert_eq!(ErrorCategory::Semantic.to_string(), "SemanticError");
    assert_eq!(ErrorCategory::Evaluation.to_string(), "EvaluationError");
}
