//! Breadth-first exploration of the reachable global states.

use super::discovery::{discover, Candidate};
use crate::core::{Participant, ParticipantBehavior};
use crate::model::{GlobalState, HybridSystemBehavior, StateId, Transition};
use crate::validation::{validate_graph, GenerateError};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use tracing::{debug, info, trace};

/// Lifecycle of one exploration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Phase {
    Initializing,
    Exploring,
    Done,
}

/// Owns every piece of mutable search state for a single generation.
///
/// States are interned: `states[id]` is the canonical instance and `index`
/// maps each state back to its identifier. A registered state is never
/// mutated afterwards.
pub(crate) struct Exploration<'g, B> {
    behaviors: &'g BTreeMap<Participant, B>,
    capacities: &'g BTreeMap<Participant, usize>,
    phase: Phase,
    states: Vec<GlobalState>,
    index: HashMap<GlobalState, StateId>,
    initial: Option<StateId>,
    frontier: VecDeque<StateId>,
    expanded: HashSet<StateId>,
    transitions: Vec<Transition>,
    recorded: HashSet<Transition>,
}

impl<'g, B: ParticipantBehavior> Exploration<'g, B> {
    pub(crate) fn new(
        behaviors: &'g BTreeMap<Participant, B>,
        capacities: &'g BTreeMap<Participant, usize>,
    ) -> Self {
        Self {
            behaviors,
            capacities,
            phase: Phase::Initializing,
            states: Vec::new(),
            index: HashMap::new(),
            initial: None,
            frontier: VecDeque::new(),
            expanded: HashSet::new(),
            transitions: Vec::new(),
            recorded: HashSet::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    /// Seed the frontier with the initial state.
    pub(crate) fn initialize(&mut self) {
        let initial = GlobalState::initial(self.behaviors, self.capacities);
        debug!("initial state {initial}");
        let id = self.register(initial);
        self.initial = Some(id);
        self.advance(Phase::Exploring);
    }

    /// Expand frontier states until none are left.
    pub(crate) fn explore(&mut self) -> Result<(), GenerateError> {
        while let Some(id) = self.frontier.pop_front() {
            if !self.expanded.insert(id) {
                continue;
            }
            let candidates = match self.states.get(id.index()) {
                Some(state) => {
                    trace!(state = %id, frontier = self.frontier.len(), "expanding {state}");
                    discover(self.behaviors, state)?
                }
                None => continue,
            };
            for candidate in candidates {
                self.record(id, candidate);
            }
        }
        self.advance(Phase::Done);
        Ok(())
    }

    /// Validate closure and hand the graph over.
    pub(crate) fn finish(self) -> Result<HybridSystemBehavior<B>, GenerateError>
    where
        B: Clone,
    {
        let initial = validate_graph(&self.states, &self.index, self.initial, &self.transitions)?;
        Ok(HybridSystemBehavior::new(
            self.behaviors.clone(),
            self.capacities.clone(),
            self.states,
            self.index,
            initial,
            self.transitions,
            self.recorded,
        ))
    }

    /// Run every phase in order.
    pub(crate) fn run(mut self) -> Result<HybridSystemBehavior<B>, GenerateError>
    where
        B: Clone,
    {
        let _span = tracing::info_span!("generate").entered();
        info!(
            participants = self.behaviors.len(),
            "generating hybrid system behavior"
        );
        self.initialize();
        self.explore()?;
        let graph = self.finish()?;
        info!(
            states = graph.state_count(),
            transitions = graph.transition_count(),
            "hybrid system behavior generated"
        );
        Ok(graph)
    }

    fn advance(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, "exploration phase change");
        self.phase = phase;
    }

    fn register(&mut self, state: GlobalState) -> StateId {
        let id = StateId(self.states.len());
        self.index.insert(state.clone(), id);
        self.states.push(state);
        self.frontier.push_back(id);
        id
    }

    /// Link a candidate into the graph, reusing an equal registered state as
    /// its target.
    fn record(&mut self, source: StateId, candidate: Candidate) {
        let Candidate { kind, target } = candidate;
        let target = match self.index.get(&target).copied() {
            Some(existing) => {
                debug!("target of {} from {source} canonicalised to {existing}", kind.label());
                existing
            }
            None => self.register(target),
        };

        let transition = Transition::new(source, target, kind);
        if self.recorded.contains(&transition) {
            debug!("duplicate transition {source} -> {target} discarded");
            return;
        }
        self.recorded.insert(transition.clone());
        self.transitions.push(transition);
    }
}
