//! The immutable exercise instance handed to the host.

use drill_expr::{Node, Step};
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use crate::options::AnswerOption;

/// One fully assembled exercise: everything a rendering/scoring host needs, as plain data.
///
/// Instances are immutable; a new request produces a new, independent instance and never touches
/// a previous one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExerciseInstance {
    /// The generated expression tree.
    pub tree: Rc<Node>,

    /// The rendered form of [`tree`](Self::tree), ready for a notation layer to typeset.
    pub display: String,

    /// The exact integer value of the expression.
    pub answer: i64,

    /// Exactly four labelled answer choices, exactly one of them correct.
    pub options: Vec<AnswerOption>,

    /// The canonical signature of [`tree`](Self::tree), used for repeat avoidance.
    pub signature: String,

    /// The ordered worked solution, one atomic reduction per step.
    pub steps: Vec<Step>,
}
