//! Input rules, checked before any exploration.
//!
//! Every rule is evaluated and all violations are reported together using
//! `Validation`; the generator still refuses to start as soon as any is found.

use crate::core::{Direction, LocalState, Participant, ParticipantBehavior};
use crate::validation::violations::{GenerateError, Violation};
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of one or more rule checks.
pub type Check = Validation<(), NonEmptyVec<Violation>>;

fn check(holds: bool, violation: impl FnOnce() -> Violation) -> Check {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn all(checks: Vec<Check>) -> Check {
    Validation::all_vec(checks).map(|_| ())
}

/// Convert accumulated input violations into a [`GenerateError::MalformedInput`].
pub fn into_result(outcome: Check) -> Result<(), GenerateError> {
    match outcome {
        Validation::Success(_) => Ok(()),
        Validation::Failure(violations) => Err(GenerateError::MalformedInput(
            violations.iter().cloned().collect(),
        )),
    }
}

/// Behaviors must be non-empty, and no two participants may share an input
/// message name or an output message name.
pub fn validate_behaviors<B: ParticipantBehavior>(behaviors: &BTreeMap<Participant, B>) -> Check {
    let mut checks = vec![check(!behaviors.is_empty(), || Violation::EmptyMap {
        map: "participant behaviors",
    })];

    let entries: Vec<_> = behaviors.iter().collect();
    for (position, (first, first_behavior)) in entries.iter().enumerate() {
        for (second, second_behavior) in entries.iter().skip(position + 1) {
            checks.push(validate_disjoint(
                first,
                *first_behavior,
                second,
                *second_behavior,
                Direction::Input,
            ));
            checks.push(validate_disjoint(
                first,
                *first_behavior,
                second,
                *second_behavior,
                Direction::Output,
            ));
        }
    }

    all(checks)
}

fn validate_disjoint<B: ParticipantBehavior>(
    first: &Participant,
    first_behavior: &B,
    second: &Participant,
    second_behavior: &B,
    direction: Direction,
) -> Check {
    let names = |behavior: &B| -> BTreeSet<String> {
        behavior
            .messages()
            .iter()
            .filter(|message| message.direction() == direction)
            .map(|message| message.name().to_string())
            .collect()
    };
    let first_names = names(first_behavior);
    let second_names = names(second_behavior);
    let shared: Vec<String> = first_names.intersection(&second_names).cloned().collect();

    check(shared.is_empty(), || {
        let (first, second) = (first.to_string(), second.to_string());
        match direction {
            Direction::Input => Violation::OverlappingInputMessages {
                first,
                second,
                shared,
            },
            Direction::Output => Violation::OverlappingOutputMessages {
                first,
                second,
                shared,
            },
        }
    })
}

/// A single capacity applied to every participant must be non-negative.
pub fn validate_uniform_capacity(capacity: i64) -> Check {
    check(capacity >= 0, || Violation::NegativeCapacity {
        element: "queue capacity".to_string(),
        value: capacity,
    })
}

/// Per-participant capacities must be non-empty and non-negative.
pub fn validate_capacities(capacities: &BTreeMap<Participant, i64>) -> Check {
    let mut checks = vec![check(!capacities.is_empty(), || Violation::EmptyMap {
        map: "queue capacities",
    })];
    checks.extend(capacities.iter().map(|(participant, capacity)| {
        check(*capacity >= 0, || Violation::NegativeCapacity {
            element: format!("queue capacity of {participant}"),
            value: *capacity,
        })
    }));
    all(checks)
}

/// Behaviors and capacities must name exactly the same participants.
pub fn validate_equal_key_sets<B>(
    behaviors: &BTreeMap<Participant, B>,
    capacities: &BTreeMap<Participant, i64>,
) -> Check {
    let same = behaviors.keys().eq(capacities.keys());
    check(same, || Violation::MismatchedKeySets {
        behaviors: behaviors.keys().map(ToString::to_string).collect(),
        capacities: capacities.keys().map(ToString::to_string).collect(),
    })
}

/// Every input rule for a generator with per-participant capacities.
pub fn validate_input_model<B: ParticipantBehavior>(
    behaviors: &BTreeMap<Participant, B>,
    capacities: &BTreeMap<Participant, i64>,
) -> Result<(), GenerateError> {
    into_result(all(vec![
        validate_behaviors(behaviors),
        validate_capacities(capacities),
        validate_equal_key_sets(behaviors, capacities),
    ]))
}

/// Every input rule for a generator with one capacity for all participants.
pub fn validate_uniform_model<B: ParticipantBehavior>(
    behaviors: &BTreeMap<Participant, B>,
    capacity: i64,
) -> Result<(), GenerateError> {
    into_result(all(vec![
        validate_behaviors(behaviors),
        validate_uniform_capacity(capacity),
    ]))
}

/// Each side of a rendezvous may match at most one synchronous transition.
pub fn validate_rendezvous(
    participant: &Participant,
    state: &LocalState,
    message: &str,
    role: &'static str,
    count: usize,
) -> Result<(), GenerateError> {
    if count <= 1 {
        return Ok(());
    }
    Err(GenerateError::AmbiguousRendezvous(
        Violation::AmbiguousSynchronousTransitions {
            participant: participant.to_string(),
            state: state.to_string(),
            message: message.to_string(),
            role,
            count,
        },
    ))
}
