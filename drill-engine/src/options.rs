//! The four-way multiple-choice option set shown alongside an exercise.

use rand::{seq::SliceRandom, Rng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed label alphabet, assigned to options in order after shuffling.
pub const LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// One answer choice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnswerOption {
    /// The label shown to the learner, from [`LABELS`].
    pub label: char,

    /// The numeric value of this choice.
    pub value: i64,

    /// Whether this choice is the correct answer.
    pub correct: bool,
}

/// Builds the shuffled option set for a correct answer: the answer itself plus three distinct
/// wrong values modelled on common mistakes.
///
/// The three seeded distractors are a small offset (skipping one step of the reduction), the
/// negation of the answer (a global sign slip), and a larger offset (mishandling a grouping).
/// Distractors that collide with the answer or with each other are discarded and replaced by
/// small random perturbations of the answer, so the returned set always holds exactly four
/// pairwise-distinct values, exactly one of them correct.
pub fn build_options(answer: i64, rng: &mut impl Rng) -> Vec<AnswerOption> {
    let mut wrong: Vec<i64> = Vec::with_capacity(3);
    let push_wrong = |wrong: &mut Vec<i64>, candidate: i64| {
        if candidate != answer && !wrong.contains(&candidate) {
            wrong.push(candidate);
        }
    };

    let sign = if rng.gen_bool(0.5) { 1 } else { -1 };
    push_wrong(&mut wrong, answer + sign * rng.gen_range(1..=9));
    push_wrong(&mut wrong, -answer);
    push_wrong(&mut wrong, answer - sign * rng.gen_range(10..=25));

    while wrong.len() < 3 {
        let offset = rng.gen_range(1..=9) * if rng.gen_bool(0.5) { 1 } else { -1 };
        push_wrong(&mut wrong, answer + offset);
    }

    let mut values = vec![answer];
    values.extend(wrong);
    values.shuffle(rng);

    values
        .into_iter()
        .zip(LABELS)
        .map(|(value, label)| AnswerOption {
            label,
            value,
            correct: value == answer,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn assert_well_formed(answer: i64, options: &[AnswerOption]) {
        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().map(|o| o.label).collect::<Vec<_>>(), LABELS);

        let correct: Vec<&AnswerOption> = options.iter().filter(|o| o.correct).collect();
        assert_eq!(correct.len(), 1);
        assert_eq!(correct[0].value, answer);

        for (i, a) in options.iter().enumerate() {
            for b in &options[i + 1..] {
                assert_ne!(a.value, b.value);
            }
        }
    }

    #[test]
    fn options_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(99);
        for answer in [-120, -3, 0, 1, 56, 400] {
            for _ in 0..500 {
                assert_well_formed(answer, &build_options(answer, &mut rng));
            }
        }
    }

    #[test]
    fn zero_answer_survives_negation_collision() {
        // -0 == 0, so the sign-slip distractor always collides and must be replaced
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert_well_formed(0, &build_options(0, &mut rng));
        }
    }
}
