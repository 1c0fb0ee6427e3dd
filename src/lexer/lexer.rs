use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer<'_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[0-9]").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[A-Z]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Variable) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^[+\\-*/]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) },
    ];
}

pub struct Lexer<'s> {
    tokens: Vec<Token>,
    source: &'s str,
    /// Byte offset into `source`, used for slicing
    byte_pos: usize,
    /// Character offset into `source`, used for spans
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Lexer<'s> {
        Lexer {
            tokens: vec![],
            source,
            byte_pos: 0,
            pos: 0,
        }
    }

    /// Moves past `matched`, which must be a prefix of the remainder.
    pub fn advance_over(&mut self, matched: &str) {
        self.byte_pos += matched.len();
        self.pos += matched.chars().count();
    }

    pub fn push(&mut self, token: Token) {
        trace!("lexed {}", token);
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or_default()
    }

    pub fn remainder(&self) -> &'s str {
        &self.source[self.byte_pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.byte_pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32)
    }
}

fn number_handler(lexer: &mut Lexer<'_>, matched: &str) {
    let digit = matched.chars().next().and_then(|c| c.to_digit(10)).map(f64::from);

    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        String::from(matched),
        digit,
        Span { start: lexer.get_position(), end: Position(lexer.pos as u32 + 1) }
    ));
    lexer.advance_over(matched);
}

fn skip_handler(lexer: &mut Lexer<'_>, matched: &str) {
    lexer.advance_over(matched);
}

/// Splits `source` into tokens, one per non-whitespace character.
///
/// Fails on the first character that is not a digit, an uppercase letter,
/// an operator or a parenthesis.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        // Patterns are anchored, so each attempt only looks at the next token
        let remaining = lex.remainder();
        let matched = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

        match matched {
            Some((handler, text)) => handler(&mut lex, text),
            None => {
                return Err(Error::new(ErrorImpl::UnrecognisedCharacter { character: lex.at() }, lex.get_position()));
            }
        }
    }

    debug!("tokenized {} characters into {} tokens", lex.pos, lex.tokens.len());
    Ok(lex.tokens)
}
