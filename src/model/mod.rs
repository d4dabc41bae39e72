//! The composed system: queues, global states, transitions and the graph.
//!
//! - `MessageQueue`: bounded FIFO buffer, name-only equality
//! - `GlobalState`: structural snapshot of all local states and queues
//! - `Transition` / `TransitionKind`: the four kinds of global edges
//! - `HybridSystemBehavior`: the reachable graph returned by the generator

mod hybrid;
mod queue;
mod state;
mod transition;

pub use hybrid::HybridSystemBehavior;
pub use queue::MessageQueue;
pub use state::{GlobalState, StateId};
pub use transition::{Transition, TransitionKind};
