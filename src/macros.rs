//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for single-character tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$number` - The parsed digit, `Some` only for `TokenKind::Number`
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "4".to_string(), Some(4.0), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $number:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            number: $number,
            span: $span,
        }
    };
}

/// Creates a lexer handler that pushes a token of the given kind for the
/// matched character and advances past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\(").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer<'_>, matched: &str| {
            let len = matched.chars().count();
            lexer.push(MK_TOKEN!(
                $kind,
                String::from(matched),
                None,
                Span {
                    start: lexer.get_position(),
                    end: Position(lexer.get_position().0 + len as u32),
                }
            ));
            lexer.advance_over(matched);
        }
    };
}
