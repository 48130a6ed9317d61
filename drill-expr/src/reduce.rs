//! The stepwise symbolic reducer.
//!
//! [`extract_steps`] replays the conventional order of operations (innermost grouping first,
//! then the operations in the order the tree nests them, left to right) as a list of atomic
//! [`Step`]s ending at a single literal. The order never needs a precedence table: the tree's
//! shape *is* the precedence, so the reducer only has to find, on each pass, the first node (depth
//! first, parent before children, left child before right child) that can be collapsed:
//!
//! - a [`Group`](Node::Group) whose content is already a single value, or
//! - a [`Binary`](Node::Binary) operation whose operands are both single values, where a grouping
//!   wrapped around a single value counts as that value and is absorbed by the operation that
//!   consumes it.
//!
//! Each pass rebuilds only the ancestors of the collapsed node and shares every other subtree, so
//! the trees captured in earlier steps stay valid: a step's `before`, `focus` and `after` strings
//! can be replayed by a solution panel long after the reduction has moved on.

use crate::expr::{BinOp, Node};
use std::rc::Rc;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One atomic reduction on the path from the full expression to its value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// A short heading for the step, such as `Multiply 12 by 24`.
    pub title: String,

    /// A natural-language explanation naming the operator, the operands, and whether the
    /// reduction happened inside a grouping or at the top level of the expression.
    pub rationale: String,

    /// The whole expression before this step.
    pub before: String,

    /// Just the part of the expression this step collapses.
    pub focus: String,

    /// The whole expression after this step.
    pub after: String,
}

/// An internal-consistency fault discovered while reducing a tree.
///
/// None of these can occur for a tree produced by the exercise generator; they exist so that a
/// malformed tree is reported as a logic defect instead of producing a nonsensical step list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReduceError {
    /// The tree is not a single literal, but no reducible node exists.
    #[error("expression tree is not a single value, but nothing in it can be reduced")]
    Stuck,

    /// A division step does not divide evenly.
    #[error("{lhs} is not evenly divisible by {rhs}")]
    UnevenDivision {
        /// The dividend.
        lhs: i64,

        /// The divisor.
        rhs: i64,
    },

    /// A division step has a zero divisor.
    #[error("division of {lhs} by zero")]
    DivisionByZero {
        /// The dividend.
        lhs: i64,
    },
}

/// The outcome of collapsing one node: the rebuilt tree and the step metadata captured at the
/// collapsed node.
struct Reduction {
    tree: Rc<Node>,
    title: String,
    rationale: String,
    focus: String,
}

/// Applies the operator to two literal operands, enforcing the exactness contract that division
/// steps must divide evenly.
fn apply_exact(op: BinOp, lhs: i64, rhs: i64) -> Result<i64, ReduceError> {
    match op {
        BinOp::Add => Ok(lhs + rhs),
        BinOp::Sub => Ok(lhs - rhs),
        BinOp::Mul => Ok(lhs * rhs),
        BinOp::Div => {
            if rhs == 0 {
                Err(ReduceError::DivisionByZero { lhs })
            } else if lhs % rhs != 0 {
                Err(ReduceError::UnevenDivision { lhs, rhs })
            } else {
                Ok(lhs / rhs)
            }
        },
    }
}

/// Builds the title and rationale for a binary reduction.
fn describe(op: BinOp, lhs: i64, rhs: i64, value: i64, inside_group: bool) -> (String, String) {
    let title = match op {
        BinOp::Add => format!("Add {} and {}", lhs, rhs),
        BinOp::Sub => format!("Subtract {} from {}", rhs, lhs),
        BinOp::Mul => format!("Multiply {} by {}", lhs, rhs),
        BinOp::Div => format!("Divide {} by {}", lhs, rhs),
    };
    let location = if inside_group {
        "inside a grouping"
    } else {
        "at the top level of the expression"
    };
    let rationale = format!(
        "Both operands of {} are single values, so evaluate {} {} {} = {} {}.",
        op, lhs, op, rhs, value, location,
    );
    (title, rationale)
}

/// Collapses the first reducible node of the tree, depth first, parent before children, left
/// child before right child.
///
/// Returns `Ok(None)` when the subtree contains no reducible node (for a literal, always).
fn reduce_once(node: &Rc<Node>, inside_group: bool) -> Result<Option<Reduction>, ReduceError> {
    match &**node {
        Node::Literal(_) => Ok(None),
        Node::Group(child) => {
            if let Some(value) = child.as_literal() {
                // the grouping wraps a single value; it no longer affects evaluation order
                return Ok(Some(Reduction {
                    tree: Node::literal(value),
                    title: format!("Remove the grouping around {}", value),
                    rationale: format!(
                        "The grouping contains the single value {}, so the parentheses can be \
                         removed.",
                        value,
                    ),
                    focus: node.to_string(),
                }));
            }
            match reduce_once(child, true)? {
                Some(reduction) => Ok(Some(Reduction {
                    tree: Node::group(reduction.tree),
                    title: reduction.title,
                    rationale: reduction.rationale,
                    focus: reduction.focus,
                })),
                None => Ok(None),
            }
        },
        Node::Binary { op, lhs, rhs } => {
            if let (Some(left), Some(right)) = (lhs.as_literal(), rhs.as_literal()) {
                let value = apply_exact(*op, left, right)?;
                let (title, rationale) = describe(*op, left, right, value, inside_group);
                return Ok(Some(Reduction {
                    tree: Node::literal(value),
                    title,
                    rationale,
                    focus: node.to_string(),
                }));
            }
            if let Some(reduction) = reduce_once(lhs, inside_group)? {
                return Ok(Some(Reduction {
                    tree: Node::binary(*op, reduction.tree, Rc::clone(rhs)),
                    title: reduction.title,
                    rationale: reduction.rationale,
                    focus: reduction.focus,
                }));
            }
            match reduce_once(rhs, inside_group)? {
                Some(reduction) => Ok(Some(Reduction {
                    tree: Node::binary(*op, Rc::clone(lhs), reduction.tree),
                    title: reduction.title,
                    rationale: reduction.rationale,
                    focus: reduction.focus,
                })),
                None => Ok(None),
            }
        },
    }
}

/// Reduces the tree to a single literal, returning the ordered list of steps taken.
///
/// The step list is fixed and replayable: each step's `after` string is the next step's `before`
/// string, and the final step's `after` string is the decimal rendering of the tree's value.
pub fn extract_steps(root: &Rc<Node>) -> Result<Vec<Step>, ReduceError> {
    let mut steps = Vec::new();
    let mut current = Rc::clone(root);
    while !matches!(&*current, Node::Literal(_)) {
        let before = current.to_string();
        let reduction = reduce_once(&current, false)?.ok_or(ReduceError::Stuck)?;
        steps.push(Step {
            title: reduction.title,
            rationale: reduction.rationale,
            before,
            focus: reduction.focus,
            after: reduction.tree.to_string(),
        });
        current = reduction.tree;
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::sample_tree;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_tree_reduces_in_six_steps() {
        let tree = sample_tree();
        let steps = extract_steps(&tree).unwrap();

        let focuses: Vec<&str> = steps.iter().map(|step| step.focus.as_str()).collect();
        assert_eq!(
            focuses,
            ["30 - 6", "12 × (24)", "288 ÷ 4", "5 + 3", "2 × (8)", "72 - 16"],
        );
        assert_eq!(steps.len(), tree.op_count());
        assert_eq!(steps.last().unwrap().after, "56");
    }

    #[test]
    fn steps_chain_before_to_after() {
        let tree = sample_tree();
        let steps = extract_steps(&tree).unwrap();

        assert_eq!(steps[0].before, tree.to_string());
        for pair in steps.windows(2) {
            assert_eq!(pair[0].after, pair[1].before);
        }
    }

    #[test]
    fn original_tree_display_survives_reduction() {
        let tree = sample_tree();
        let display = tree.to_string();
        extract_steps(&tree).unwrap();
        // earlier trees are shared, never mutated
        assert_eq!(tree.to_string(), display);
    }

    #[test]
    fn grouping_with_unreduced_sibling_collapses_on_its_own() {
        // (30 - 6) × (5 + 3): once the left grouping holds 24, its sibling is still unreduced,
        // so the parentheses come off in a step of their own
        let tree = Node::binary(
            BinOp::Mul,
            Node::group(Node::binary(BinOp::Sub, Node::literal(30), Node::literal(6))),
            Node::group(Node::binary(BinOp::Add, Node::literal(5), Node::literal(3))),
        );
        let steps = extract_steps(&tree).unwrap();

        let focuses: Vec<&str> = steps.iter().map(|step| step.focus.as_str()).collect();
        assert_eq!(focuses, ["30 - 6", "(24)", "5 + 3", "24 × (8)"]);
        assert_eq!(steps.last().unwrap().after, "192");
    }

    #[test]
    fn grouped_root_collapses_to_its_value() {
        let tree = Node::group(Node::binary(BinOp::Add, Node::literal(5), Node::literal(3)));
        let steps = extract_steps(&tree).unwrap();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].focus, "(8)");
        assert_eq!(steps[1].after, "8");
    }

    #[test]
    fn rationale_distinguishes_grouped_from_top_level() {
        let tree = sample_tree();
        let steps = extract_steps(&tree).unwrap();

        assert!(steps[0].rationale.contains("inside a grouping"));
        assert!(steps[5].rationale.contains("top level"));
    }

    #[test]
    fn literal_tree_takes_no_steps() {
        let tree = Node::literal(42);
        assert_eq!(extract_steps(&tree).unwrap(), []);
    }

    #[test]
    fn uneven_division_is_a_fault() {
        let tree = Node::binary(BinOp::Div, Node::literal(7), Node::literal(2));
        assert_eq!(
            extract_steps(&tree),
            Err(ReduceError::UnevenDivision { lhs: 7, rhs: 2 }),
        );
    }

    #[test]
    fn division_by_zero_is_a_fault() {
        let tree = Node::binary(BinOp::Div, Node::literal(5), Node::literal(0));
        assert_eq!(extract_steps(&tree), Err(ReduceError::DivisionByZero { lhs: 5 }));
    }
}
