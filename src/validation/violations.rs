//! Violations and the errors that carry them.

use crate::builder::BuildError;
use crate::model::StateId;
use thiserror::Error;

/// One broken rule, with the offending values inlined.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("The map '{map}' must not be empty")]
    EmptyMap { map: &'static str },

    #[error(
        "The participant sets of behaviors [{}] and queue capacities [{}] differ",
        .behaviors.join(", "),
        .capacities.join(", ")
    )]
    MismatchedKeySets {
        behaviors: Vec<String>,
        capacities: Vec<String>,
    },

    #[error("The element '{element}' must be greater than or equal 0 but was: {value}")]
    NegativeCapacity { element: String, value: i64 },

    #[error(
        "The input messages of participants {first} and {second} must be disjoint, both declare [{}]",
        .shared.join(", ")
    )]
    OverlappingInputMessages {
        first: String,
        second: String,
        shared: Vec<String>,
    },

    #[error(
        "The output messages of participants {first} and {second} must be disjoint, both declare [{}]",
        .shared.join(", ")
    )]
    OverlappingOutputMessages {
        first: String,
        second: String,
        shared: Vec<String>,
    },

    #[error(
        "Participant {participant} has {count} synchronous {role} transitions for '{message}' from local state {state}, expected at most 1"
    )]
    AmbiguousSynchronousTransitions {
        participant: String,
        state: String,
        message: String,
        role: &'static str,
        count: usize,
    },

    #[error("The {role} state {state} is not contained in the set of states")]
    UnregisteredState { state: StateId, role: &'static str },

    #[error("The initial state must not be absent")]
    MissingInitialState,
}

/// Errors returned while constructing a generator or generating a graph.
///
/// None of them is transient: the generator is a pure function of its input,
/// so the same input always fails the same way.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerateError {
    /// A required value was never supplied.
    #[error(transparent)]
    AbsentRequiredValue(#[from] BuildError),

    /// The participant model breaks one or more input rules.
    #[error("Malformed input: {}", join(.0))]
    MalformedInput(Vec<Violation>),

    /// A (sender, receiver, message) combination matched more than one
    /// synchronous transition on one side.
    #[error("Malformed input: {0}")]
    AmbiguousRendezvous(Violation),

    /// The generated graph is not closed; indicates a generator defect.
    #[error("Structural invariant violated: {}", join(.0))]
    StructuralInvariant(Vec<Violation>),
}

impl GenerateError {
    /// The rule violations behind this error, if any.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::AbsentRequiredValue(_) => &[],
            Self::MalformedInput(violations) | Self::StructuralInvariant(violations) => violations,
            Self::AmbiguousRendezvous(violation) => std::slice::from_ref(violation),
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput(_) | Self::AmbiguousRendezvous(_))
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
