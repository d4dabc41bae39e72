//! Edges of the global state graph.

use super::state::StateId;
use crate::core::{Message, Participant};
use serde::{Deserialize, Serialize};

/// What happened along a global transition, with the payload of that kind only.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TransitionKind {
    /// `sender` put `message` at the tail of `receiver`'s queue.
    AsynchronousSend {
        sender: Participant,
        receiver: Participant,
        message: Message,
    },

    /// The owner of the queue removed `message` from its head.
    AsynchronousReceiveAndConsumption { message: Message },

    /// `sender` and `receiver` moved together; no queue was touched.
    SynchronousSendReceive {
        sender: Participant,
        receiver: Participant,
        message_name: String,
    },

    /// One participant took a silent step.
    InternalAction,
}

impl TransitionKind {
    /// Label shown between source and target when rendering.
    pub fn label(&self) -> &str {
        match self {
            Self::AsynchronousSend { message, .. } => message.name(),
            Self::SynchronousSendReceive { message_name, .. } => message_name,
            Self::AsynchronousReceiveAndConsumption { .. } | Self::InternalAction => "epsilon",
        }
    }

    pub fn is_synchronous(&self) -> bool {
        matches!(self, Self::SynchronousSendReceive { .. })
    }

    pub fn is_asynchronous(&self) -> bool {
        matches!(
            self,
            Self::AsynchronousSend { .. } | Self::AsynchronousReceiveAndConsumption { .. }
        )
    }

    /// Participants named by the payload, as `(sender, receiver)`.
    pub fn participants(&self) -> Option<(&Participant, &Participant)> {
        match self {
            Self::AsynchronousSend {
                sender, receiver, ..
            }
            | Self::SynchronousSendReceive {
                sender, receiver, ..
            } => Some((sender, receiver)),
            _ => None,
        }
    }
}

/// A transition between two registered states.
///
/// Source and target are canonical identifiers, so two transitions are
/// structurally equal exactly when kind, payload and endpoints match.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition {
    pub source: StateId,
    pub target: StateId,
    pub kind: TransitionKind,
}

impl Transition {
    pub fn new(source: StateId, target: StateId, kind: TransitionKind) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }
}
