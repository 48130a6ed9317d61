//! Display formatting for expression trees.
//!
//! Formatting is a pure function of tree structure. Groupings are always rendered with explicit
//! parentheses, even where conventional precedence would make them redundant: the tree's shape is
//! the only authority on evaluation order, and the rendered form must say exactly what the tree
//! says.

use crate::expr::{BinOp, Node};
use std::fmt;

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "×"),
            Self::Div => write!(f, "÷"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{}", value),
            Self::Group(child) => write!(f, "({})", child),
            Self::Binary { op, lhs, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
        }
    }
}
