//! State-space generation.
//!
//! [`HybridSystemBehaviorGenerator`] validates the participant model when it
//! is constructed and explores the reachable global states breadth-first when
//! [`generate`](HybridSystemBehaviorGenerator::generate) is called. For each
//! dequeued state the four discovery algorithms run in a fixed order:
//!
//! 1. asynchronous send
//! 2. asynchronous receive and consumption
//! 3. synchronous rendezvous
//! 4. internal action
//!
//! Every candidate target is looked up among the registered states first, so
//! each distinct global state appears exactly once in the result.

mod discovery;
mod engine;
mod exploration;

pub use discovery::{
    asynchronous_receive_candidates, asynchronous_send_candidates, channel, discover,
    internal_action_candidates, synchronous_rendezvous_candidates, Candidate,
};
pub use engine::HybridSystemBehaviorGenerator;
