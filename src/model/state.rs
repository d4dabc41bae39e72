//! Global states of the composed system.

use super::queue::MessageQueue;
use crate::core::{LocalState, Participant, ParticipantBehavior};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical identifier of a state registered in a generated graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Snapshot of every participant's local state and queue.
///
/// Equality and hashing are structural. A state is only mutated while it is
/// a freshly cloned candidate; once registered in a graph it is read-only.
///
/// # Example
///
/// ```rust
/// use hybrid_system_behavior::core::{LocalState, Participant};
/// use hybrid_system_behavior::model::{GlobalState, MessageQueue};
/// use std::collections::BTreeMap;
///
/// let locals = BTreeMap::from([
///     (Participant::new("P1"), LocalState::new("s0")),
///     (Participant::new("P2"), LocalState::new("s0")),
/// ]);
/// let queues = BTreeMap::from([
///     (Participant::new("P1"), MessageQueue::new(1)),
///     (Participant::new("P2"), MessageQueue::new(1)),
/// ]);
///
/// let state = GlobalState::new(locals, queues);
/// assert_eq!(state.to_string(), "(P1:s0:[],P2:s0:[])");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct GlobalState {
    local_states: BTreeMap<Participant, LocalState>,
    queues: BTreeMap<Participant, MessageQueue>,
}

impl GlobalState {
    pub fn new(
        local_states: BTreeMap<Participant, LocalState>,
        queues: BTreeMap<Participant, MessageQueue>,
    ) -> Self {
        Self {
            local_states,
            queues,
        }
    }

    /// Every participant in its initial local state with an empty queue.
    pub fn initial<B: ParticipantBehavior>(
        behaviors: &BTreeMap<Participant, B>,
        capacities: &BTreeMap<Participant, usize>,
    ) -> Self {
        let local_states = behaviors
            .iter()
            .map(|(participant, behavior)| (participant.clone(), behavior.initial_state().clone()))
            .collect();
        let queues = capacities
            .iter()
            .map(|(participant, capacity)| (participant.clone(), MessageQueue::new(*capacity)))
            .collect();
        Self::new(local_states, queues)
    }

    pub fn local_state(&self, participant: &Participant) -> Option<&LocalState> {
        self.local_states.get(participant)
    }

    pub fn queue(&self, participant: &Participant) -> Option<&MessageQueue> {
        self.queues.get(participant)
    }

    pub fn local_states(&self) -> &BTreeMap<Participant, LocalState> {
        &self.local_states
    }

    pub fn queues(&self) -> &BTreeMap<Participant, MessageQueue> {
        &self.queues
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.local_states.keys()
    }

    pub(crate) fn set_local_state(&mut self, participant: &Participant, state: LocalState) {
        if let Some(slot) = self.local_states.get_mut(participant) {
            *slot = state;
        }
    }

    pub(crate) fn queue_mut(&mut self, participant: &Participant) -> Option<&mut MessageQueue> {
        self.queues.get_mut(participant)
    }
}

impl fmt::Display for GlobalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (position, (participant, local)) in self.local_states.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "{participant}:{local}:")?;
            match self.queues.get(participant) {
                Some(queue) => write!(f, "{queue}")?,
                None => f.write_str("[]")?,
            }
        }
        f.write_str(")")
    }
}
