//! Expression trees for "operations combined" arithmetic drills, together with everything that
//! consumes them structurally: a pure evaluator, a display formatter, a canonical signature
//! encoding, and a stepwise symbolic reducer.
//!
//! The tree type here is deliberately tiny. An exercise expression is built from exactly three
//! shapes (an integer [`Literal`](expr::Node::Literal), an explicit
//! [`Group`](expr::Node::Group), and a [`Binary`](expr::Node::Binary) operation over `+`, `-`,
//! `×` and `÷`), and operator precedence is carried entirely by how the tree is nested. There is
//! no parser and no precedence table anywhere in this crate: trees are constructed
//! programmatically (by the generator crate) already in the shape they should be reduced in.
//!
//! Trees are immutable. Children are reference-counted, so "rewriting" a node during reduction
//! rebuilds only the ancestors on the path from the root to that node and shares every untouched
//! subtree. Earlier trees therefore remain valid forever, which is what lets
//! [`extract_steps`](reduce::extract_steps) hand out a permanent, replayable record of every
//! intermediate display string.

pub mod expr;
pub mod fmt;
pub mod reduce;
pub mod signature;

pub use expr::{BinOp, Node};
pub use reduce::{extract_steps, ReduceError, Step};
