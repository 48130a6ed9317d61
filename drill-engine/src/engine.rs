//! The session-level orchestrator.

use crate::{
    error::EngineError,
    generate::generate,
    history::SignatureHistory,
    instance::ExerciseInstance,
};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

/// The result of grading one answer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    /// Whether the chosen option was the correct one.
    pub correct: bool,

    /// The correct numeric answer.
    pub correct_value: i64,

    /// The label of the correct option.
    pub correct_label: char,
}

/// One learner session: an owned randomness source plus the window of recently issued exercises.
///
/// Every operation is a plain call-and-return; the history window is the only state that carries
/// across calls, and it belongs to this engine alone. A host running several sessions creates
/// several engines.
#[derive(Debug)]
pub struct Engine {
    rng: StdRng,
    history: SignatureHistory,
}

impl Engine {
    /// Creates an engine seeded from system entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates an engine with a fixed seed, for reproducible exercise streams.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            history: SignatureHistory::new(),
        }
    }

    /// Replaces the session's history window, e.g. to use a non-default capacity.
    pub fn with_history(mut self, history: SignatureHistory) -> Self {
        self.history = history;
        self
    }

    /// Assembles a fresh exercise, avoiding every signature still inside the session window.
    pub fn request_exercise(&mut self) -> ExerciseInstance {
        self.request_exercise_excluding(&[])
    }

    /// Assembles a fresh exercise, avoiding the session window plus the caller-supplied
    /// signatures.
    pub fn request_exercise_excluding(&mut self, extra: &[String]) -> ExerciseInstance {
        let exclude: HashSet<&str> = self
            .history
            .iter()
            .chain(extra.iter().map(String::as_str))
            .collect();
        let instance = generate(&mut self.rng, &exclude);

        debug!(signature = %instance.signature, answer = instance.answer, "issued exercise");
        self.history.record(instance.signature.clone());
        instance
    }

    /// Grades the selection of the option labelled `label` on `instance`.
    ///
    /// A label that names no option is an integration bug and reported as
    /// [`EngineError::UnknownLabel`], distinct from a legitimate wrong answer. Grading never
    /// retries anything and never mutates the instance.
    pub fn grade(&self, instance: &ExerciseInstance, label: char) -> Result<Grade, EngineError> {
        let chosen = instance
            .options
            .iter()
            .find(|option| option.label == label)
            .ok_or(EngineError::UnknownLabel { label })?;
        let correct = instance
            .options
            .iter()
            .find(|option| option.correct)
            .ok_or(EngineError::NoCorrectOption)?;

        Ok(Grade {
            correct: chosen.correct,
            correct_value: correct.value,
            correct_label: correct.label,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
