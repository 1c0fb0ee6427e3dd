use log::trace;

use crate::{
    ast::expressions::{Expr, Operator},
    engine::resolver::Resolution,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::{Parser, MAX_NESTING_DEPTH}};

pub fn parse_expr(parser: &mut Parser<'_>, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let Some(token) = parser.current_token() else {
        return Err(Error::new(ErrorImpl::UnexpectedEnd, parser.get_position()));
    };

    let Some(nud) = parser.get_nud_lookup().get(&token.kind).copied() else {
        return Err(if token.kind == TokenKind::CloseParen {
            Error::new(ErrorImpl::UnbalancedParentheses, token.span.start)
        } else {
            Error::new(ErrorImpl::UnexpectedToken { token: token.value.clone() }, token.span.start)
        });
    };

    let mut left = nud(parser)?;

    // Strictly greater, so equal precedence associates to the left
    while parser.current_binding_power() > bp {
        let operator_bp = parser.current_binding_power();
        let Some(led) = parser.current_token_kind().and_then(|kind| parser.get_led_lookup().get(&kind).copied()) else {
            break;
        };

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let position = parser.get_position();
    let Some(token) = parser.advance() else {
        return Err(Error::new(ErrorImpl::UnexpectedEnd, position));
    };

    match token.kind {
        TokenKind::Number => match token.number {
            Some(value) => Ok(Expr::literal(value, token.span)),
            None => Err(Error::new(ErrorImpl::UnexpectedToken { token: token.value }, token.span.start)),
        },
        TokenKind::Variable => {
            let name = token.symbol();

            match parser.resolve(name) {
                Resolution::Value(value) => Ok(Expr::literal(value, token.span)),
                Resolution::NotNumeric(value) => Err(Error::new(
                    ErrorImpl::NonNumericVariable { variable: name, value: Some(value) },
                    token.span.start,
                )),
                Resolution::Absent => Err(Error::new(
                    ErrorImpl::NonNumericVariable { variable: name, value: None },
                    token.span.start,
                )),
            }
        }
        _ => Err(Error::new(ErrorImpl::UnexpectedToken { token: token.value }, token.span.start)),
    }
}

pub fn parse_binary_expr(parser: &mut Parser<'_>, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let position = parser.get_position();
    let operator_token = parser.advance().ok_or_else(|| Error::new(ErrorImpl::UnexpectedEnd, position))?;

    let operator = Operator::from_symbol(operator_token.symbol()).ok_or_else(|| {
        Error::new(ErrorImpl::UnexpectedToken { token: operator_token.value.clone() }, operator_token.span.start)
    })?;

    let operand_missing = match parser.current_token() {
        Some(token) => token.is_one_of_many(&[TokenKind::CloseParen]),
        None => true,
    };

    if operand_missing {
        return Err(Error::new(
            ErrorImpl::MissingOperand { after: operator_token.value.clone() },
            parser.get_position(),
        ));
    }

    parser.enter_nesting(operator_token.span.start)?;
    let right = parse_expr(parser, bp)?;
    parser.exit_nesting();
    trace!("combined operands with `{}`", operator);

    // Long chains like `1+1+1...` grow the tree without recursing here
    let expr = Expr::binary(left, operator, operator_token.span, right);
    if expr.depth() > MAX_NESTING_DEPTH {
        return Err(Error::new(
            ErrorImpl::NestingTooDeep { limit: MAX_NESTING_DEPTH },
            operator_token.span.start,
        ));
    }

    Ok(expr)
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let position = parser.get_position();
    let open = parser.advance().ok_or_else(|| Error::new(ErrorImpl::UnexpectedEnd, position))?;

    match parser.current_token_kind() {
        None => return Err(Error::new(ErrorImpl::UnbalancedParentheses, open.span.start)),
        Some(TokenKind::CloseParen) => {
            return Err(Error::new(
                ErrorImpl::MissingOperand { after: open.value },
                parser.get_position(),
            ));
        }
        Some(_) => {}
    }

    parser.enter_nesting(open.span.start)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.exit_nesting();

    if !parser.has_tokens() {
        return Err(Error::new(ErrorImpl::UnbalancedParentheses, open.span.start));
    }
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
