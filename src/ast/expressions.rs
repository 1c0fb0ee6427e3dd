use std::fmt::Display;

use crate::Span;

/// Binary operators supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Literal Expression
/// A leaf holding a digit or the value a variable resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: f64,
    pub span: Span,
}

/// Binary Expression
/// An operator node, always with both operands present.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
    pub right: Box<Expr>,
    /// Location of the operator itself.
    pub operator_span: Span,
    pub span: Span,
    /// Height of this subtree, literals count as 1.
    pub depth: usize,
}

/// Expression tree. Every node is owned by exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn literal(value: f64, span: Span) -> Self {
        Expr::Literal(LiteralExpr { value, span })
    }

    pub fn binary(left: Expr, operator: Operator, operator_span: Span, right: Expr) -> Self {
        let span = Span {
            start: left.get_span().start,
            end: right.get_span().end,
        };
        let depth = 1 + left.depth().max(right.depth());

        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            operator_span,
            span,
            depth,
        })
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(literal) => &literal.span,
            Expr::Binary(binary) => &binary.span,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Binary(binary) => binary.depth,
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Binary(binary) => 1 + binary.left.node_count() + binary.right.node_count(),
        }
    }
}

// Fully parenthesised, so the grouping chosen by the parser is visible
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{}", literal.value),
            Expr::Binary(binary) => write!(f, "({} {} {})", binary.left, binary.operator, binary.right),
        }
    }
}
