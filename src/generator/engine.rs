//! The public generator.

use super::exploration::Exploration;
use crate::core::{LocalBehavior, Participant, ParticipantBehavior};
use crate::model::HybridSystemBehavior;
use crate::validation::{validate_input_model, validate_uniform_model, GenerateError};
use std::collections::BTreeMap;

/// Validated participant model, ready to be explored.
///
/// Construction runs every input rule; a value of this type is known to be
/// well-formed apart from the rendezvous rule, which depends on reachable
/// states and is checked during [`generate`](Self::generate).
///
/// # Example
///
/// ```rust
/// use hybrid_system_behavior::core::{LocalBehavior, Participant};
/// use hybrid_system_behavior::generator::HybridSystemBehaviorGenerator;
/// use std::collections::BTreeMap;
///
/// let behaviors = BTreeMap::from([
///     (
///         Participant::new("P1"),
///         LocalBehavior::builder()
///             .initial("s0")
///             .output("m1")
///             .async_send("s0", "s1", "m1")
///             .build()
///             .unwrap(),
///     ),
///     (
///         Participant::new("P2"),
///         LocalBehavior::builder()
///             .initial("s0")
///             .input("m1")
///             .async_receive("s0", "s1", "m1")
///             .build()
///             .unwrap(),
///     ),
/// ]);
///
/// let generator = HybridSystemBehaviorGenerator::with_uniform_capacity(behaviors, 1).unwrap();
/// let graph = generator.generate().unwrap();
///
/// assert_eq!(graph.state_count(), 3);
/// assert_eq!(graph.transition_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct HybridSystemBehaviorGenerator<B = LocalBehavior> {
    behaviors: BTreeMap<Participant, B>,
    capacities: BTreeMap<Participant, usize>,
}

impl<B: ParticipantBehavior> HybridSystemBehaviorGenerator<B> {
    /// Every participant gets a queue of the same capacity.
    pub fn with_uniform_capacity(
        behaviors: BTreeMap<Participant, B>,
        capacity: i64,
    ) -> Result<Self, GenerateError> {
        validate_uniform_model(&behaviors, capacity)?;
        let capacity = queue_capacity(capacity);
        let capacities = behaviors
            .keys()
            .map(|participant| (participant.clone(), capacity))
            .collect();
        Ok(Self {
            behaviors,
            capacities,
        })
    }

    /// Each participant gets its own capacity. Both maps must name the same
    /// participants.
    pub fn with_capacities(
        behaviors: BTreeMap<Participant, B>,
        capacities: BTreeMap<Participant, i64>,
    ) -> Result<Self, GenerateError> {
        validate_input_model(&behaviors, &capacities)?;
        let capacities = capacities
            .into_iter()
            .map(|(participant, capacity)| (participant, queue_capacity(capacity)))
            .collect();
        Ok(Self {
            behaviors,
            capacities,
        })
    }

    pub fn behaviors(&self) -> &BTreeMap<Participant, B> {
        &self.behaviors
    }

    pub fn queue_capacities(&self) -> &BTreeMap<Participant, usize> {
        &self.capacities
    }

    /// Explore every reachable global state.
    ///
    /// Deterministic: the same generator always yields the same states and
    /// transitions in the same order. Fails with
    /// [`GenerateError::AmbiguousRendezvous`] if a reachable local state offers
    /// more than one synchronous transition for the same channel.
    pub fn generate(&self) -> Result<HybridSystemBehavior<B>, GenerateError>
    where
        B: Clone,
    {
        Exploration::new(&self.behaviors, &self.capacities).run()
    }
}

// Non-negative after validation; saturates where usize is narrower than i64.
fn queue_capacity(capacity: i64) -> usize {
    usize::try_from(capacity).unwrap_or(usize::MAX)
}
