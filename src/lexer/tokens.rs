use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Variable,
    Operator,
    OpenParen,
    CloseParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The single source character this token was read from.
    pub value: String,
    /// Parsed digit value, only present on `Number` tokens.
    pub number: Option<f64>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} ({})", self.kind, number),
            None => write!(f, "{} ({})", self.kind, self.value),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// The source character of this token.
    pub fn symbol(&self) -> char {
        self.value.chars().next().unwrap_or_default()
    }
}

/// Joins the source text of `tokens` back into a string.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.value.as_str()).collect()
}
