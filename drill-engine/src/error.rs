//! Errors surfaced at the engine's host-facing boundary.
//!
//! Generation never returns an error (exhaustion of its retry budget is absorbed by the fixed
//! fallback exercise), so the only errors a host can see are invocation mistakes at the grading
//! boundary, which must stay distinguishable from a legitimate wrong answer.

use thiserror::Error;

/// An invocation error raised by [`Engine::grade`](crate::Engine::grade).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The chosen label does not name any option of the instance. This is a caller bug, not a
    /// wrong answer.
    #[error("no answer option is labelled `{label}`")]
    UnknownLabel {
        /// The label the caller passed.
        label: char,
    },

    /// The instance has no option marked correct. Instances built by the engine always have
    /// exactly one; this can only happen for an instance assembled by hand.
    #[error("exercise instance has no correct option")]
    NoCorrectOption,
}
