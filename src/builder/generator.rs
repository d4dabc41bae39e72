//! Builder for constructing generators.

use crate::builder::error::BuildError;
use crate::core::{LocalBehavior, Participant, ParticipantBehavior};
use crate::generator::HybridSystemBehaviorGenerator;
use crate::validation::GenerateError;
use std::collections::BTreeMap;

/// Fluent construction of a [`HybridSystemBehaviorGenerator`].
///
/// A per-participant capacity overrides the uniform one.
///
/// # Example
///
/// ```rust
/// use hybrid_system_behavior::builder::GeneratorBuilder;
/// use hybrid_system_behavior::core::LocalBehavior;
///
/// let generator = GeneratorBuilder::new()
///     .participant(
///         "P1",
///         LocalBehavior::builder()
///             .initial("s0")
///             .output("m1")
///             .async_send("s0", "s1", "m1")
///             .build()
///             .unwrap(),
///     )
///     .participant(
///         "P2",
///         LocalBehavior::builder()
///             .initial("s0")
///             .input("m1")
///             .async_receive("s0", "s1", "m1")
///             .build()
///             .unwrap(),
///     )
///     .uniform_capacity(1)
///     .build()
///     .unwrap();
///
/// assert_eq!(generator.generate().unwrap().state_count(), 3);
/// ```
#[derive(Debug)]
pub struct GeneratorBuilder<B = LocalBehavior> {
    behaviors: BTreeMap<Participant, B>,
    capacities: BTreeMap<Participant, i64>,
    uniform: Option<i64>,
}

impl<B: ParticipantBehavior> GeneratorBuilder<B> {
    pub fn new() -> Self {
        Self {
            behaviors: BTreeMap::new(),
            capacities: BTreeMap::new(),
            uniform: None,
        }
    }

    /// Add a participant, replacing any earlier behavior under the same name.
    pub fn participant(mut self, participant: impl Into<Participant>, behavior: B) -> Self {
        self.behaviors.insert(participant.into(), behavior);
        self
    }

    /// Set the queue capacity of one participant.
    pub fn capacity(mut self, participant: impl Into<Participant>, capacity: i64) -> Self {
        self.capacities.insert(participant.into(), capacity);
        self
    }

    /// Set the queue capacity of every participant without its own.
    pub fn uniform_capacity(mut self, capacity: i64) -> Self {
        self.uniform = Some(capacity);
        self
    }

    /// Build the generator.
    /// Returns an error if no participant was added, a participant has no
    /// capacity, or the model breaks an input rule.
    pub fn build(self) -> Result<HybridSystemBehaviorGenerator<B>, GenerateError> {
        if self.behaviors.is_empty() {
            return Err(BuildError::NoParticipants.into());
        }

        let mut capacities = self.capacities;
        for participant in self.behaviors.keys() {
            if capacities.contains_key(participant) {
                continue;
            }
            let capacity = self.uniform.ok_or_else(|| BuildError::MissingCapacity {
                participant: participant.to_string(),
            })?;
            capacities.insert(participant.clone(), capacity);
        }

        HybridSystemBehaviorGenerator::with_capacities(self.behaviors, capacities)
    }
}

impl<B: ParticipantBehavior> Default for GeneratorBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}
