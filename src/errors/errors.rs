use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnbalancedParentheses => "UnbalancedParentheses",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
            ErrorImpl::UnexpectedEnd => "UnexpectedEnd",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::NonNumericVariable { .. } => "NonNumericVariable",
            ErrorImpl::DivisionByZero => "DivisionByZero",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorCategory::Lexical,
            ErrorImpl::UnbalancedParentheses
            | ErrorImpl::MissingOperand { .. }
            | ErrorImpl::UnexpectedEnd
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::TrailingTokens { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorCategory::Syntax,
            ErrorImpl::NonNumericVariable { .. } => ErrorCategory::Semantic,
            ErrorImpl::DivisionByZero => ErrorCategory::Evaluation,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnbalancedParentheses => {
                ErrorTip::Suggestion(String::from("every `(` needs a matching `)`"))
            }
            ErrorImpl::MissingOperand { after } => ErrorTip::Suggestion(format!(
                "`{}` must be followed by a digit, a variable or `(`",
                after
            )),
            ErrorImpl::UnexpectedEnd => ErrorTip::None,
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::TrailingTokens { .. } => ErrorTip::Suggestion(String::from(
                "numbers are single digits, did you miss an operator?",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "expressions may nest at most {} levels deep",
                limit
            )),
            ErrorImpl::NonNumericVariable { variable, value } => match value {
                Some(value) => ErrorTip::Suggestion(format!(
                    "`{}` was given `{}`, which is not a number",
                    variable, value
                )),
                None => ErrorTip::Suggestion(format!("no value was provided for `{}`", variable)),
            },
            ErrorImpl::DivisionByZero => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Semantic,
    Evaluation,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexical => write!(f, "LexicalError"),
            ErrorCategory::Syntax => write!(f, "SyntaxError"),
            ErrorCategory::Semantic => write!(f, "SemanticError"),
            ErrorCategory::Evaluation => write!(f, "EvaluationError"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character '{character}'")]
    UnrecognisedCharacter { character: char },
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("missing operand after `{after}`")]
    MissingOperand { after: String },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unexpected token `{token}`")]
    UnexpectedToken { token: String },
    #[error("trailing tokens starting at `{token}`")]
    TrailingTokens { token: String },
    #[error("expression nested too deeply")]
    NestingTooDeep { limit: usize },
    #[error("non-numeric variable `{variable}`")]
    NonNumericVariable { variable: char, value: Option<String> },
    #[error("division by zero")]
    DivisionByZero,
}
