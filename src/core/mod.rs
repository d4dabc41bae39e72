//! Inputs of the composition: participants and their local automata.
//!
//! This module contains the read-only side of the engine:
//! - `Participant` and `LocalState` identifiers
//! - `Message` with its two equality notions
//! - the `ParticipantBehavior` trait and its `LocalBehavior` implementation
//!
//! Nothing in here is ever mutated by the generator.

mod behavior;
mod message;
mod participant;

pub use behavior::{LocalAction, LocalBehavior, LocalTransition, ParticipantBehavior};
pub use message::{Direction, Message};
pub use participant::{LocalState, Participant};
