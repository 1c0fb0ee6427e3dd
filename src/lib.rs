#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod engine;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use engine::engine::{calculate, DivisionPolicy, Engine, EngineConfig};
pub use engine::presenter::{ConsolePresenter, Presenter};
pub use engine::resolver::{MapResolver, Resolution, VariableResolver};

/// Character offset into the original expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Builds the user-facing message for `error` raised while handling `expression`.
pub fn describe_error(error: &Error, expression: &str) -> String {
    /*
        Error: SyntaxError (unbalanced parentheses)
          |
          | (1+2
          | ^
    */

    let mut message = if let ErrorTip::None = error.get_tip() {
        format!("Error: {} ({})", error.category(), error)
    } else {
        format!("Error: {} ({}, {})", error.category(), error, error.get_tip())
    };

    let (line_text, removed_whitespace) = remove_starting_whitespace(expression);
    let column = (error.get_position().0 as usize).saturating_sub(removed_whitespace);
    let arrows = column + 1;

    message.push_str(&format!("\n  |\n  | {}\n  | {:->arrows$}", line_text.trim_end(), "^"));
    message
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c.is_whitespace() {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
