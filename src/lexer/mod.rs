//! Lexical analysis module.
//!
//! Converts a raw expression into a stream of single-character tokens:
//!
//! - Digits become `Number` tokens carrying their value
//! - Uppercase letters become `Variable` tokens
//! - `+ - * /` become `Operator` tokens, `(` and `)` parenthesis tokens
//! - Whitespace is discarded, anything else is a lexical error

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
