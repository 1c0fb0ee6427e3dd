//! Parser module for building the expression tree.
//!
//! This module transforms a stream of tokens into an `Expr` tree. It uses
//! precedence climbing (a minimal Pratt parser) and handles:
//!
//! - Operator precedence and left associativity
//! - Parenthesised sub-expressions
//! - Resolving variables to literals as they are parsed
//! - Syntax and semantic error reporting
//!
//! The parser uses NUD (null denotation) handlers for tokens that start an
//! operand and LED (left denotation) handlers for infix operators, with
//! binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
