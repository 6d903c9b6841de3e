//! The [`BinOp`] enumeration of arithmetic operators.

use std::fmt;

/// One of the four arithmetic operators defined between fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// `lhs * rhs`
    Mul,
    /// `lhs / rhs`
    Div,
    /// `lhs + rhs`
    Add,
    /// `lhs - rhs`
    Sub,
}

impl BinOp {
    /// All operators, in binding-generation order.
    pub const ALL: [BinOp; 4] = [BinOp::Mul, BinOp::Div, BinOp::Add, BinOp::Sub];

    /// Apply the operator to a pair of elements.
    pub fn apply(self, lhs: f32, rhs: f32) -> f32 {
        match self {
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
        }
    }

    /// The operator's source-level symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
