//! Local participant behavior.
//!
//! Each participant is described by its own finite automaton. The generator
//! only ever reads these automata; the [`ParticipantBehavior`] trait is the
//! seam through which any representation can be plugged in, and
//! [`LocalBehavior`] is the ready-made one.

use super::message::Message;
use super::participant::LocalState;
use crate::builder::LocalBehaviorBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Debug;

/// What a local transition does when it fires.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LocalAction {
    /// Silent step, no communication.
    Internal,
    /// Rendezvous send; carries an output message.
    SynchronousSend(Message),
    /// Rendezvous receive; carries an input message.
    SynchronousReceive(Message),
    /// Buffered send into the receiver's queue; carries an output message.
    AsynchronousSend(Message),
    /// Consumption from the head of the own queue; carries an input message.
    AsynchronousReceive(Message),
}

impl LocalAction {
    /// The message carried by a communicating action.
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Internal => None,
            Self::SynchronousSend(message)
            | Self::SynchronousReceive(message)
            | Self::AsynchronousSend(message)
            | Self::AsynchronousReceive(message) => Some(message),
        }
    }
}

/// An edge of a participant's local automaton.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct LocalTransition {
    pub source: LocalState,
    pub target: LocalState,
    pub action: LocalAction,
}

impl LocalTransition {
    pub fn new(source: LocalState, target: LocalState, action: LocalAction) -> Self {
        Self {
            source,
            target,
            action,
        }
    }
}

/// Read-only view of a participant's local automaton.
///
/// # Example
///
/// ```rust
/// use hybrid_system_behavior::core::{LocalBehavior, LocalState, ParticipantBehavior};
///
/// let sender = LocalBehavior::builder()
///     .initial("s0")
///     .output("m1")
///     .async_send("s0", "s1", "m1")
///     .build()
///     .unwrap();
///
/// assert_eq!(sender.initial_state(), &LocalState::new("s0"));
/// assert_eq!(sender.transitions_from(&LocalState::new("s0")).count(), 1);
/// assert_eq!(sender.output_messages().count(), 1);
/// ```
pub trait ParticipantBehavior: Debug {
    /// The state the participant starts in.
    fn initial_state(&self) -> &LocalState;

    /// Every local state of the automaton.
    fn states(&self) -> &BTreeSet<LocalState>;

    /// Every message the participant sends or receives.
    fn messages(&self) -> &BTreeSet<Message>;

    /// Every local transition. Callers treat the slice as a set.
    fn transitions(&self) -> &[LocalTransition];

    /// Local transitions leaving `state`.
    fn transitions_from<'a>(
        &'a self,
        state: &'a LocalState,
    ) -> impl Iterator<Item = &'a LocalTransition> + 'a {
        self.transitions()
            .iter()
            .filter(move |transition| &transition.source == state)
    }

    /// Messages this participant receives.
    fn input_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages().iter().filter(|message| message.is_input())
    }

    /// Messages this participant sends.
    fn output_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages().iter().filter(|message| message.is_output())
    }
}

/// Plain data implementation of [`ParticipantBehavior`].
///
/// Construct one with [`LocalBehavior::builder`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LocalBehavior {
    pub(crate) initial: LocalState,
    pub(crate) states: BTreeSet<LocalState>,
    pub(crate) messages: BTreeSet<Message>,
    pub(crate) transitions: Vec<LocalTransition>,
}

impl LocalBehavior {
    pub fn builder() -> LocalBehaviorBuilder {
        LocalBehaviorBuilder::new()
    }
}

impl ParticipantBehavior for LocalBehavior {
    fn initial_state(&self) -> &LocalState {
        &self.initial
    }

    fn states(&self) -> &BTreeSet<LocalState> {
        &self.states
    }

    fn messages(&self) -> &BTreeSet<Message> {
        &self.messages
    }

    fn transitions(&self) -> &[LocalTransition] {
        &self.transitions
    }
}
