//! Build errors for local behaviors and generators.

use thiserror::Error;

/// Errors raised when a required piece of a model was never supplied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No participants defined. Add at least one participant with .participant(name, behavior)")]
    NoParticipants,

    #[error("No queue capacity for participant '{participant}'. Call .capacity(participant, n) or .uniform_capacity(n)")]
    MissingCapacity { participant: String },

    #[error("Transition {from} -> {to} uses {expected} message '{message}' which is not declared. Call .{expected}(\"{message}\")")]
    UndeclaredMessage {
        from: String,
        to: String,
        message: String,
        expected: &'static str,
    },
}
