//! The fixed structural templates exercises are built from.
//!
//! A template pins down the arrangement of operators and groupings and names which operand
//! positions are free; building a template samples the free operands from bounded ranges chosen
//! so the rendered expression stays compact. Divisions are the delicate part: a divisor is drawn
//! from the pool of values that evenly divide the dividend as it stands at that point of
//! construction, resampling the operands feeding the division a bounded number of times if the
//! pool is empty and falling back to a divisor of 1 as a last resort. Every template therefore
//! produces a tree whose divisions are exact by construction; the generator still re-checks the
//! evaluated result before accepting a tree.

use drill_expr::{BinOp, Node};
use rand::Rng;
use std::rc::Rc;

/// How many times the operands feeding a division are resampled before giving up and using a
/// divisor of 1.
pub const DIVISOR_RETRIES: usize = 8;

/// A fixed expression shape with template-specific operand ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// `a × (b − c) ÷ d − e × (f + g)`
    MulGroupDivMinusMulGroup,

    /// `(a + b) × c − d`
    GroupMulMinus,

    /// `a ÷ b + c × (d − e)`
    DivPlusMulGroup,

    /// `(a + b) ÷ c + d × e`
    GroupDivPlusMul,

    /// `a × b − (c + d) ÷ e`
    MulMinusGroupDiv,
}

impl Template {
    /// Every template, in the order the generator samples them.
    pub const ALL: [Template; 5] = [
        Template::MulGroupDivMinusMulGroup,
        Template::GroupMulMinus,
        Template::DivPlusMulGroup,
        Template::GroupDivPlusMul,
        Template::MulMinusGroupDiv,
    ];

    /// Builds one tree matching this template, with fresh randomly sampled operands.
    pub fn build(self, rng: &mut impl Rng) -> Rc<Node> {
        match self {
            Self::MulGroupDivMinusMulGroup => {
                let b = rng.gen_range(10..=40);
                let c = rng.gen_range(2..=9);
                let (a, d) = divisible_product(rng, 2..=12, b - c);
                let e = rng.gen_range(2..=9);
                let f = rng.gen_range(2..=9);
                let g = rng.gen_range(2..=9);
                Node::binary(
                    BinOp::Sub,
                    Node::binary(
                        BinOp::Div,
                        Node::binary(
                            BinOp::Mul,
                            Node::literal(a),
                            Node::group(Node::binary(BinOp::Sub, Node::literal(b), Node::literal(c))),
                        ),
                        Node::literal(d),
                    ),
                    Node::binary(
                        BinOp::Mul,
                        Node::literal(e),
                        Node::group(Node::binary(BinOp::Add, Node::literal(f), Node::literal(g))),
                    ),
                )
            },
            Self::GroupMulMinus => {
                let a = rng.gen_range(2..=20);
                let b = rng.gen_range(2..=20);
                let c = rng.gen_range(2..=9);
                let d = rng.gen_range(1..=20);
                Node::binary(
                    BinOp::Sub,
                    Node::binary(
                        BinOp::Mul,
                        Node::group(Node::binary(BinOp::Add, Node::literal(a), Node::literal(b))),
                        Node::literal(c),
                    ),
                    Node::literal(d),
                )
            },
            Self::DivPlusMulGroup => {
                let (a, b) = divisible_sample(rng, 10..=60);
                let c = rng.gen_range(2..=9);
                let d = rng.gen_range(3..=9);
                let e = rng.gen_range(1..d);
                Node::binary(
                    BinOp::Add,
                    Node::binary(BinOp::Div, Node::literal(a), Node::literal(b)),
                    Node::binary(
                        BinOp::Mul,
                        Node::literal(c),
                        Node::group(Node::binary(BinOp::Sub, Node::literal(d), Node::literal(e))),
                    ),
                )
            },
            Self::GroupDivPlusMul => {
                let (a, b, c) = divisible_sum(rng, 2..=20);
                let d = rng.gen_range(2..=9);
                let e = rng.gen_range(2..=9);
                Node::binary(
                    BinOp::Add,
                    Node::binary(
                        BinOp::Div,
                        Node::group(Node::binary(BinOp::Add, Node::literal(a), Node::literal(b))),
                        Node::literal(c),
                    ),
                    Node::binary(BinOp::Mul, Node::literal(d), Node::literal(e)),
                )
            },
            Self::MulMinusGroupDiv => {
                let a = rng.gen_range(2..=9);
                let b = rng.gen_range(2..=9);
                let (c, d, e) = divisible_sum(rng, 2..=20);
                Node::binary(
                    BinOp::Sub,
                    Node::binary(BinOp::Mul, Node::literal(a), Node::literal(b)),
                    Node::binary(
                        BinOp::Div,
                        Node::group(Node::binary(BinOp::Add, Node::literal(c), Node::literal(d))),
                        Node::literal(e),
                    ),
                )
            },
        }
    }
}

/// Draws a divisor of `dividend` from `2..=9`, or `None` if the dividend has no divisor in that
/// range.
fn pick_divisor(rng: &mut impl Rng, dividend: i64) -> Option<i64> {
    let candidates: Vec<i64> = (2..=9).filter(|d| dividend % d == 0).collect();
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}

/// Samples a factor from `range` and a divisor of `factor * multiplier`, resampling the factor up
/// to [`DIVISOR_RETRIES`] times when no divisor exists, then falling back to a divisor of 1.
fn divisible_product(
    rng: &mut impl Rng,
    range: std::ops::RangeInclusive<i64>,
    multiplier: i64,
) -> (i64, i64) {
    for _ in 0..DIVISOR_RETRIES {
        let factor = rng.gen_range(range.clone());
        if let Some(divisor) = pick_divisor(rng, factor * multiplier) {
            return (factor, divisor);
        }
    }
    (rng.gen_range(range), 1)
}

/// Samples a dividend from `range` and a divisor of it, resampling the dividend up to
/// [`DIVISOR_RETRIES`] times when no divisor exists, then falling back to a divisor of 1.
fn divisible_sample(rng: &mut impl Rng, range: std::ops::RangeInclusive<i64>) -> (i64, i64) {
    for _ in 0..DIVISOR_RETRIES {
        let dividend = rng.gen_range(range.clone());
        if let Some(divisor) = pick_divisor(rng, dividend) {
            return (dividend, divisor);
        }
    }
    (rng.gen_range(range), 1)
}

/// Samples two addends from `range` and a divisor of their sum, resampling the second addend up
/// to [`DIVISOR_RETRIES`] times when no divisor exists, then falling back to a divisor of 1.
fn divisible_sum(rng: &mut impl Rng, range: std::ops::RangeInclusive<i64>) -> (i64, i64, i64) {
    let a = rng.gen_range(range.clone());
    for _ in 0..DIVISOR_RETRIES {
        let b = rng.gen_range(range.clone());
        if let Some(divisor) = pick_divisor(rng, a + b) {
            return (a, b, divisor);
        }
    }
    (a, rng.gen_range(range), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    /// Every template must uphold the generator's two structural invariants: the tree evaluates
    /// to a finite integer, and its depth stays small enough to render compactly.
    #[test]
    fn every_template_yields_exact_integers() {
        let mut rng = StdRng::seed_from_u64(0xD1CE);
        for template in Template::ALL {
            for _ in 0..2_000 {
                let tree = template.build(&mut rng);
                let value = tree.eval();
                assert!(
                    value.is_finite() && value.fract() == 0.0,
                    "{:?} built {} = {}",
                    template,
                    tree,
                    value,
                );
                assert!(tree.depth() <= 6, "{:?} built a tree of depth {}", template, tree.depth());
            }
        }
    }

    #[test]
    fn templates_reduce_cleanly() {
        let mut rng = StdRng::seed_from_u64(7);
        for template in Template::ALL {
            for _ in 0..200 {
                let tree = template.build(&mut rng);
                let steps = drill_expr::extract_steps(&tree).unwrap();
                assert_eq!(steps.len(), tree.op_count());
                assert_eq!(steps.last().unwrap().after, (tree.eval() as i64).to_string());
            }
        }
    }

    #[test]
    fn pick_divisor_only_returns_divisors() {
        let mut rng = StdRng::seed_from_u64(1);
        for dividend in 2..200 {
            if let Some(divisor) = pick_divisor(&mut rng, dividend) {
                assert_eq!(dividend % divisor, 0);
                assert!((2..=9).contains(&divisor));
            }
        }
    }

    #[test]
    fn pick_divisor_prime_dividend_has_no_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_divisor(&mut rng, 97), None);
    }
}
