//! Coordinating entry point.
//!
//! Runs lexer, parser and evaluator in turn and reports the outcome through
//! the two external collaborators: a `VariableResolver` that supplies
//! variable values and a `Presenter` that renders the result or the error.

pub mod engine;
pub mod presenter;
pub mod resolver;
