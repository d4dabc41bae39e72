//! Messages exchanged between participants.
//!
//! A message is scoped to the participant that declares it: the sender
//! declares it as [`Direction::Output`], the receiver as [`Direction::Input`].
//! Two notions of equality are kept apart:
//!
//! - full equality (`==`) compares name and direction, and decides membership
//!   in a participant's declared message set;
//! - [`Message::same_name`] compares names only, and is what channel matching
//!   and queue contents use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a participant receives or emits a message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Direction {
    Input,
    Output,
}

/// A named message together with its direction.
///
/// # Example
///
/// ```rust
/// use hybrid_system_behavior::core::Message;
///
/// let sent = Message::output("order");
/// let received = Message::input("order");
///
/// assert_ne!(sent, received);
/// assert!(sent.same_name(&received));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Message {
    name: String,
    direction: Direction,
}

impl Message {
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }

    pub fn input(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Input)
    }

    pub fn output(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Output)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_input(&self) -> bool {
        self.direction == Direction::Input
    }

    pub fn is_output(&self) -> bool {
        self.direction == Direction::Output
    }

    /// Name-only comparison, ignoring direction.
    pub fn same_name(&self, other: &Message) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Input => write!(f, "?{}", self.name),
            Direction::Output => write!(f, "!{}", self.name),
        }
    }
}
