//! Parser implementation for building the expression tree.
//!
//! This module contains the `Parser` cursor and the `parse` entry point.
//! A `Parser` lives for exactly one `parse` call: it owns the token
//! stream, the read position and its handler tables, and borrows the
//! variable resolver for the duration of the call.

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::expressions::Expr,
    engine::resolver::{Resolution, VariableResolver},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        PRECEDENCE_LOOKUP,
    },
};

/// Deepest parenthesis nesting, and tallest tree, a parse accepts.
/// Keeps parsing, evaluation and dropping of the tree within the stack.
pub const MAX_NESTING_DEPTH: usize = 512;

/// The parsing state of a single `parse` call.
pub struct Parser<'r> {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Source position just past the last token
    end: Position,
    /// Number of groups and operands currently being parsed
    depth: usize,
    /// Supplies values for variables as they are reached
    resolver: &'r mut dyn VariableResolver,
    /// Lookup table for null denotation (operand) handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) handlers
    led_lookup: LEDLookup,
}

impl<'r> Parser<'r> {
    /// Creates a new Parser instance with empty handler tables.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `resolver` - Resolver consulted for every variable token
    pub fn new(tokens: Vec<Token>, resolver: &'r mut dyn VariableResolver) -> Self {
        let end = tokens.last().map(|token| token.span.end).unwrap_or_else(Position::null);

        Parser {
            tokens,
            pos: 0,
            end,
            depth: 0,
            resolver,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Binding power of the current token. Anything that is not an
    /// operator, including the end of input, binds with `Default`.
    pub fn current_binding_power(&self) -> BindingPower {
        match self.current_token() {
            Some(token) if token.kind == TokenKind::Operator => PRECEDENCE_LOOKUP
                .get(&token.symbol())
                .copied()
                .unwrap_or(BindingPower::Default),
            _ => BindingPower::Default,
        }
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, `UnexpectedToken`
    /// for another token and `UnexpectedEnd` when input is exhausted.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => {
                self.advance().ok_or_else(|| Error::new(ErrorImpl::UnexpectedEnd, self.end))
            }
            Some(token) => Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.value.clone() },
                token.span.start,
            )),
            None => Err(Error::new(ErrorImpl::UnexpectedEnd, self.end)),
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Marks the start of a nested group or operand at `position`.
    pub fn enter_nesting(&mut self, position: Position) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(Error::new(ErrorImpl::NestingTooDeep { limit: MAX_NESTING_DEPTH }, position));
        }
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Looks up the value of variable `name`.
    pub fn resolve(&mut self, name: char) -> Resolution {
        let resolution = self.resolver.resolve(name);
        debug!("resolved variable {} to {:?}", name, resolution);
        resolution
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token kind.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (operand) handler for a token kind.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the source position of the current token, or the end of
    /// input once every token has been consumed.
    pub fn get_position(&self) -> Position {
        self.current_token().map(|token| token.span.start).unwrap_or(self.end)
    }
}

/// Parses a stream of tokens into an expression tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables and parses one expression at minimum
/// precedence, which must consume every token.
///
/// Variables are resolved through `resolver` as they are reached, so the
/// returned tree contains only literals and operators.
pub fn parse(tokens: Vec<Token>, resolver: &mut dyn VariableResolver) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens, resolver);
    create_token_lookups(&mut parser);

    let expr = parse_expr(&mut parser, BindingPower::Default)?;

    if let Some(token) = parser.current_token() {
        return Err(if token.kind == TokenKind::CloseParen {
            Error::new(ErrorImpl::UnbalancedParentheses, token.span.start)
        } else {
            Error::new(ErrorImpl::TrailingTokens { token: token.value.clone() }, token.span.start)
        });
    }

    trace!("parsed {}", expr);
    Ok(expr)
}
