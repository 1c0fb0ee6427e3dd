use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::expressions::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    Additive = 1,
    Multiplicative = 2,
}

lazy_static! {
    /// Operator precedence, shared read-only by every parse.
    pub static ref PRECEDENCE_LOOKUP: HashMap<char, BindingPower> = {
        let mut map = HashMap::new();
        map.insert('+', BindingPower::Additive);
        map.insert('-', BindingPower::Additive);
        map.insert('*', BindingPower::Multiplicative);
        map.insert('/', BindingPower::Multiplicative);
        map
    };
}

pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    // Infix
    parser.led(TokenKind::Operator, parse_binary_expr);

    // Operands
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Variable, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
}

// Lookup tables inside parser struct, so each parse owns its own
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
