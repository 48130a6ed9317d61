//! The bounded-retry exercise generator.

use crate::{
    instance::ExerciseInstance,
    options::{build_options, AnswerOption},
    template::Template,
};
use drill_expr::{extract_steps, BinOp, Node};
use rand::Rng;
use std::collections::HashSet;
use tracing::{trace, warn};

/// How many whole-tree attempts a single request may spend before the fixed fallback exercise is
/// served. Generation is probabilistic construction, not a proof, so the budget is an explicit
/// counted loop rather than an open-ended retry.
pub const MAX_ATTEMPTS: usize = 32;

/// Generates one exercise instance whose signature avoids `exclude`, falling back to
/// [`fallback_instance`] if the attempt budget runs out.
///
/// Each attempt picks a template uniformly at random, builds a tree, and discards it if its value
/// is not a finite integer, if its signature is excluded, or if step extraction reports an
/// internal-consistency fault. Only the retry loop here is probabilistic; everything downstream
/// of an accepted tree is deterministic.
pub fn generate(rng: &mut impl Rng, exclude: &HashSet<&str>) -> ExerciseInstance {
    for attempt in 0..MAX_ATTEMPTS {
        let template = Template::ALL[rng.gen_range(0..Template::ALL.len())];
        let tree = template.build(rng);

        let value = tree.eval();
        if !value.is_finite() || value.fract() != 0.0 {
            trace!(attempt, %tree, value, "discarding tree with non-integer value");
            continue;
        }
        let answer = value as i64;

        let signature = tree.signature();
        if exclude.contains(signature.as_str()) {
            trace!(attempt, %tree, "discarding recently issued tree");
            continue;
        }

        let steps = match extract_steps(&tree) {
            Ok(steps) => steps,
            Err(err) => {
                // a template bug, not a user condition; skip the tree rather than surface it
                warn!(attempt, %tree, %err, "discarding tree that failed step extraction");
                continue;
            },
        };

        return ExerciseInstance {
            display: tree.to_string(),
            answer,
            options: build_options(answer, rng),
            signature,
            steps,
            tree,
        };
    }

    warn!("generation budget exhausted, serving the fallback exercise");
    fallback_instance()
}

/// The fixed, hand-verified exercise served when the generation budget is exhausted:
/// `12 × (30 - 6) ÷ 4 - 2 × (5 + 3) = 56`.
///
/// Its option set is fixed too, so the fallback needs no randomness at all.
pub fn fallback_instance() -> ExerciseInstance {
    let tree = Node::binary(
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
    );
    let steps = extract_steps(&tree).expect("fallback tree is hand-verified");

    let options = [(40, false), (56, true), (65, false), (-56, false)]
        .into_iter()
        .zip(crate::options::LABELS)
        .map(|((value, correct), label)| AnswerOption { label, value, correct })
        .collect();

    ExerciseInstance {
        display: tree.to_string(),
        answer: 56,
        options,
        signature: tree.signature(),
        steps,
        tree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generated_instances_are_consistent() {
        let mut rng = StdRng::seed_from_u64(0xABCD);
        let exclude = HashSet::new();
        for _ in 0..2_000 {
            let instance = generate(&mut rng, &exclude);

            assert_eq!(instance.tree.eval(), instance.answer as f64);
            assert_eq!(instance.display, instance.tree.to_string());
            assert_eq!(instance.signature, instance.tree.signature());

            assert_eq!(instance.steps.len(), instance.tree.op_count());
            assert_eq!(instance.steps[0].before, instance.display);
            assert_eq!(instance.steps.last().unwrap().after, instance.answer.to_string());

            assert_eq!(instance.options.iter().filter(|o| o.correct).count(), 1);
        }
    }

    #[test]
    fn generation_avoids_excluded_signatures() {
        let mut rng = StdRng::seed_from_u64(17);
        let first = generate(&mut rng, &HashSet::new());

        let mut exclude = HashSet::new();
        exclude.insert(first.signature.as_str());
        for _ in 0..200 {
            let instance = generate(&mut rng, &exclude);
            assert_ne!(instance.signature, first.signature);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let exclude = HashSet::new();
        for _ in 0..50 {
            let left = generate(&mut a, &exclude);
            let right = generate(&mut b, &exclude);
            assert_eq!(left.signature, right.signature);
            assert_eq!(left.options, right.options);
        }
    }

    #[test]
    fn fallback_is_the_verified_exercise() {
        let instance = fallback_instance();

        assert_eq!(instance.display, "12 × (30 - 6) ÷ 4 - 2 × (5 + 3)");
        assert_eq!(instance.answer, 56);
        assert_eq!(instance.steps.len(), 6);
        assert_eq!(instance.steps.last().unwrap().after, "56");

        let correct: Vec<_> = instance.options.iter().filter(|o| o.correct).collect();
        assert_eq!(correct.len(), 1);
        assert_eq!(correct[0].label, 'B');
        assert_eq!(correct[0].value, 56);
    }
}
