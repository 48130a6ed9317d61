//! The expression tree itself, plus the pure numeric evaluator.

use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operator in an exercise expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOp {
    /// Addition, displayed as `+`.
    Add,

    /// Subtraction, displayed as `-`.
    Sub,

    /// Multiplication, displayed as `×`.
    Mul,

    /// Division, displayed as `÷`.
    Div,
}

impl BinOp {
    /// Applies the operator to two numbers using ordinary arithmetic.
    ///
    /// Division is true division, not integer division; `5 ÷ 2` is `2.5`. Whether the result is
    /// an exact integer is a contract the tree's *builder* must establish; see
    /// [`Node::eval`].
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

/// One node of an exercise expression tree.
///
/// Children are [`Rc`]-shared so that reduction can rebuild a path from the root to a rewritten
/// node without copying (or invalidating) any untouched subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A leaf holding a concrete non-negative integer.
    Literal(i64),

    /// An explicit grouping. Its child must be fully reduced before it can combine with anything
    /// outside the grouping, and it is always displayed with parentheses.
    Group(Rc<Node>),

    /// A binary operation over two subtrees.
    Binary {
        /// The operator of the binary expression.
        op: BinOp,

        /// The left-hand side of the binary expression.
        lhs: Rc<Node>,

        /// The right-hand side of the binary expression.
        rhs: Rc<Node>,
    },
}

impl Node {
    /// Creates a literal leaf.
    pub fn literal(value: i64) -> Rc<Self> {
        Rc::new(Self::Literal(value))
    }

    /// Wraps a subtree in an explicit grouping.
    pub fn group(child: Rc<Self>) -> Rc<Self> {
        Rc::new(Self::Group(child))
    }

    /// Combines two subtrees with a binary operator.
    pub fn binary(op: BinOp, lhs: Rc<Self>, rhs: Rc<Self>) -> Rc<Self> {
        Rc::new(Self::Binary { op, lhs, rhs })
    }

    /// Evaluates the tree to a number using ordinary (non-truncating) arithmetic.
    ///
    /// The evaluator makes no integrality assumption: a tree containing `5 ÷ 2` evaluates to
    /// `2.5`, and a division by zero evaluates to an infinity. Producing trees whose value is a
    /// finite integer is the generator's responsibility; callers that need that guarantee should
    /// check `value.is_finite() && value.fract() == 0.0` on the result.
    pub fn eval(&self) -> f64 {
        match self {
            Self::Literal(value) => *value as f64,
            Self::Group(child) => child.eval(),
            Self::Binary { op, lhs, rhs } => op.apply(lhs.eval(), rhs.eval()),
        }
    }

    /// Returns the literal value of this node, unwrapping any chain of groupings around it.
    ///
    /// A grouping whose content is already reduced to a single value behaves like that value for
    /// the purposes of reduction: `(24)` may combine with an operand outside the parentheses.
    pub fn as_literal(&self) -> Option<i64> {
        match self {
            Self::Literal(value) => Some(*value),
            Self::Group(child) => child.as_literal(),
            Self::Binary { .. } => None,
        }
    }

    /// Returns the number of binary operations in the tree.
    pub fn op_count(&self) -> usize {
        match self {
            Self::Literal(_) => 0,
            Self::Group(child) => child.op_count(),
            Self::Binary { lhs, rhs, .. } => 1 + lhs.op_count() + rhs.op_count(),
        }
    }

    /// Returns the depth of the tree, counting every node (a bare literal has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Group(child) => 1 + child.depth(),
            Self::Binary { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
        }
    }
}

/// The worked scenario from the exercise family this engine serves:
/// `12 × (30 − 6) ÷ 4 − 2 × (5 + 3)`. Shared by the test modules across this crate.
#[cfg(test)]
pub(crate) fn sample_tree() -> Rc<Node> {
    Node::binary(
        BinOp::Sub,
        Node::binary(
            BinOp::Div,
            Node::binary(
                BinOp::Mul,
                Node::literal(12),
                Node::group(Node::binary(BinOp::Sub, Node::literal(30), Node::literal(6))),
            ),
            Node::literal(4),
        ),
        Node::binary(
            BinOp::Mul,
            Node::literal(2),
            Node::group(Node::binary(BinOp::Add, Node::literal(5), Node::literal(3))),
        ),
    )
}
