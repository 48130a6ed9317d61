//! Canonical signatures for repeat avoidance.
//!
//! A signature is a deterministic pre-order encoding of a tree: operators in prefix position,
//! groupings as square brackets, literals as decimal digits. Two structurally identical trees
//! always encode identically, and because the encoding is fully parenthesized it is actually
//! injective over tree structure: distinct trees never share a signature. The session layer only
//! relies on the weaker "different with overwhelming probability" contract, using signatures as a
//! cheap key to skip recently issued exercises.

use crate::expr::{BinOp, Node};
use std::fmt::Write;

impl BinOp {
    /// The single ASCII character used for this operator inside signatures.
    fn signature_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl Node {
    /// Returns the canonical signature of the tree.
    pub fn signature(&self) -> String {
        let mut out = String::new();
        self.write_signature(&mut out);
        out
    }

    fn write_signature(&self, out: &mut String) {
        match self {
            Self::Literal(value) => {
                // infallible for String
                let _ = write!(out, "{}", value);
            },
            Self::Group(child) => {
                out.push('[');
                child.write_signature(out);
                out.push(']');
            },
            Self::Binary { op, lhs, rhs } => {
                out.push('(');
                out.push(op.signature_char());
                out.push(' ');
                lhs.write_signature(out);
                out.push(' ');
                rhs.write_signature(out);
                out.push(')');
            },
        }
    }
}
