//! The generated reachable state graph.

use super::state::{GlobalState, StateId};
use super::transition::{Transition, TransitionKind};
use crate::core::{LocalBehavior, Message, Participant, ParticipantBehavior};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Reachable global states of a set of participants and the transitions
/// between them.
///
/// States are stored once each and addressed by [`StateId`]; transitions
/// reference those identifiers. The participant behaviors are passed through
/// unchanged from the generator input.
#[derive(Clone, Debug)]
pub struct HybridSystemBehavior<B = LocalBehavior> {
    behaviors: BTreeMap<Participant, B>,
    capacities: BTreeMap<Participant, usize>,
    states: Vec<GlobalState>,
    index: HashMap<GlobalState, StateId>,
    initial: StateId,
    messages: BTreeSet<Message>,
    transitions: Vec<Transition>,
    recorded: HashSet<Transition>,
}

impl<B: ParticipantBehavior> HybridSystemBehavior<B> {
    pub(crate) fn new(
        behaviors: BTreeMap<Participant, B>,
        capacities: BTreeMap<Participant, usize>,
        states: Vec<GlobalState>,
        index: HashMap<GlobalState, StateId>,
        initial: StateId,
        transitions: Vec<Transition>,
        recorded: HashSet<Transition>,
    ) -> Self {
        let messages = behaviors
            .values()
            .flat_map(|behavior| behavior.messages().iter().cloned())
            .collect();
        Self {
            behaviors,
            capacities,
            states,
            index,
            initial,
            messages,
            transitions,
            recorded,
        }
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.behaviors.keys()
    }

    pub fn behaviors(&self) -> &BTreeMap<Participant, B> {
        &self.behaviors
    }

    pub fn behavior(&self, participant: &Participant) -> Option<&B> {
        self.behaviors.get(participant)
    }

    pub fn queue_capacities(&self) -> &BTreeMap<Participant, usize> {
        &self.capacities
    }

    /// Every message declared by any participant, both directions.
    pub fn messages(&self) -> &BTreeSet<Message> {
        &self.messages
    }

    /// Registered states, indexed by [`StateId::index`].
    pub fn states(&self) -> &[GlobalState] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> Option<&GlobalState> {
        self.states.get(id.index())
    }

    /// Identifier of the registered state structurally equal to `state`.
    pub fn find_state(&self, state: &GlobalState) -> Option<StateId> {
        self.index.get(state).copied()
    }

    pub fn contains_state(&self, state: &GlobalState) -> bool {
        self.index.contains_key(state)
    }

    pub fn initial_state_id(&self) -> StateId {
        self.initial
    }

    pub fn initial_state(&self) -> &GlobalState {
        &self.states[self.initial.index()]
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn contains_transition(&self, transition: &Transition) -> bool {
        self.recorded.contains(transition)
    }

    /// Transitions leaving `state`, in discovery order.
    pub fn outgoing(&self, state: StateId) -> impl Iterator<Item = &Transition> {
        self.transitions
            .iter()
            .filter(move |transition| transition.source == state)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn render_state(&self, id: StateId) -> String {
        match self.state(id) {
            Some(state) => state.to_string(),
            None => id.to_string(),
        }
    }

    /// Debug rendering such as `(P1:(..), m1, P2:(..), asynchronous)`.
    pub fn render_transition(&self, transition: &Transition) -> String {
        let source = self.render_state(transition.source);
        let target = self.render_state(transition.target);
        let label = transition.kind.label();
        match &transition.kind {
            TransitionKind::AsynchronousSend {
                sender, receiver, ..
            } => format!("({sender}:{source}, {label}, {receiver}:{target}, asynchronous)"),
            TransitionKind::SynchronousSendReceive {
                sender, receiver, ..
            } => format!("({sender}:{source}, {label}, {receiver}:{target}, synchronous)"),
            TransitionKind::AsynchronousReceiveAndConsumption { .. }
            | TransitionKind::InternalAction => format!("({source}, {label}, {target})"),
        }
    }
}
