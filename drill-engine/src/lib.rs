//! Generation, orchestration and grading of "operations combined" arithmetic drill exercises.
//!
//! One [`Engine`] serves one learner session. Each call to
//! [`Engine::request_exercise`] assembles a fresh, immutable
//! [`ExerciseInstance`]: a randomly generated expression tree that is guaranteed to evaluate to
//! an exact integer, its display string, a four-way multiple-choice option set with exactly one
//! correct entry, a canonical signature used to avoid near-term repeats, and the full worked
//! solution as an ordered list of reduction steps.
//!
//! Generation is probabilistic but bounded: a counted retry loop discards trees that fail the
//! integrality or repeat-avoidance checks, and a fixed, hand-verified fallback exercise is served
//! if the budget is ever exhausted, so exercise delivery never halts. All randomness flows
//! through an injectable seed ([`Engine::with_seed`]) for reproducible streams.

pub mod engine;
pub mod error;
pub mod generate;
pub mod history;
pub mod instance;
pub mod options;
pub mod template;

pub use engine::{Engine, Grade};
pub use error::EngineError;
pub use history::SignatureHistory;
pub use instance::{AnswerOption, ExerciseInstance};
pub use template::Template;
