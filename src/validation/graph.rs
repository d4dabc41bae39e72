//! Closure rules for a generated graph.

use crate::model::{GlobalState, StateId, Transition};
use crate::validation::rules::Check;
use crate::validation::violations::{GenerateError, Violation};
use std::collections::HashMap;
use stillwater::validation::Validation;

fn registered(states: &[GlobalState], index: &HashMap<GlobalState, StateId>, id: StateId) -> bool {
    states
        .get(id.index())
        .and_then(|state| index.get(state))
        .is_some_and(|canonical| *canonical == id)
}

fn membership(
    states: &[GlobalState],
    index: &HashMap<GlobalState, StateId>,
    id: StateId,
    role: &'static str,
) -> Check {
    if registered(states, index, id) {
        Validation::success(())
    } else {
        Validation::fail(Violation::UnregisteredState { state: id, role })
    }
}

/// Every transition endpoint and the initial state must be registered.
/// Returns the initial state's identifier.
pub fn validate_graph(
    states: &[GlobalState],
    index: &HashMap<GlobalState, StateId>,
    initial: Option<StateId>,
    transitions: &[Transition],
) -> Result<StateId, GenerateError> {
    let mut checks: Vec<Check> = Vec::with_capacity(transitions.len() * 2 + 1);
    for transition in transitions {
        checks.push(membership(states, index, transition.source, "source"));
        checks.push(membership(states, index, transition.target, "target"));
    }
    checks.push(match initial {
        Some(id) => membership(states, index, id, "initial"),
        None => Validation::fail(Violation::MissingInitialState),
    });

    match Validation::all_vec(checks) {
        Validation::Success(_) => {
            initial.ok_or_else(|| GenerateError::StructuralInvariant(vec![Violation::MissingInitialState]))
        }
        Validation::Failure(violations) => Err(GenerateError::StructuralInvariant(
            violations.iter().cloned().collect(),
        )),
    }
}
