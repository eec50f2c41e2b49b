use std::fmt::{self, Display};

/// A parsed boolean expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A `true` or `false` constant.
    Literal(bool),
    /// Negation of a single operand.
    Not(Box<Expr>),
    /// Conjunction; left operand first.
    And(Box<Expr>, Box<Expr>),
    /// Disjunction; left operand first.
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Negate an expression.
    pub fn not(operand: Expr) -> Expr {
        Expr::Not(Box::new(operand))
    }

    /// Conjoin two expressions.
    pub fn and(lhs: Expr, rhs: Expr) -> Expr {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    /// Disjoin two expressions.
    pub fn or(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }
}

// Fully parenthesized at binary nodes, so the output re-parses to the same
// tree.
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Not(operand) => write!(f, "!{operand}"),
            Expr::And(lhs, rhs) => write!(f, "({lhs}&&{rhs})"),
            Expr::Or(lhs, rhs) => write!(f, "({lhs}||{rhs})"),
        }
    }
}

/// Tag identifying which binary operator a matcher saw, carried between
/// matching and reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    And,
    Or,
}

impl BinOp {
    /// Build the binary node for this operator.
    pub fn apply(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            BinOp::And => Expr::and(lhs, rhs),
            BinOp::Or => Expr::or(lhs, rhs),
        }
    }
}
