//! Participant and local-state identifiers.
//!
//! Both are opaque names. They are only ever used as map keys or compared
//! for equality, so they order and hash by name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named communicating entity.
///
/// # Example
///
/// ```rust
/// use hybrid_system_behavior::core::Participant;
///
/// let client = Participant::new("Client");
/// assert_eq!(client.name(), "Client");
/// assert_eq!(client.to_string(), "Client");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Participant(String);

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A state of one participant's local automaton.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct LocalState(String);

impl LocalState {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocalState {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
