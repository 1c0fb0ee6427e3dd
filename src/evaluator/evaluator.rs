use log::trace;

use crate::{
    ast::expressions::{BinaryExpr, Expr, Operator},
    engine::engine::DivisionPolicy,
    errors::errors::{Error, ErrorImpl},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    division: DivisionPolicy,
}

impl Evaluator {
    pub fn new(division: DivisionPolicy) -> Self {
        Evaluator { division }
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<f64, Error> {
        match expr {
            Expr::Literal(literal) => Ok(literal.value),
            Expr::Binary(binary) => self.evaluate_binary(binary),
        }
    }

    fn evaluate_binary(&self, binary: &BinaryExpr) -> Result<f64, Error> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        let result = match binary.operator {
            Operator::Plus => left + right,
            Operator::Minus => left - right,
            Operator::Star => left * right,
            Operator::Slash => {
                if right == 0.0 && self.division == DivisionPolicy::Reject {
                    return Err(Error::new(ErrorImpl::DivisionByZero, binary.operator_span.start));
                }
                left / right
            }
        };

        trace!("{} {} {} = {}", left, binary.operator, right, result);
        Ok(result)
    }
}

/// Evaluates `expr` with the default division policy.
pub fn evaluate(expr: &Expr) -> Result<f64, Error> {
    Evaluator::default().evaluate(expr)
}
