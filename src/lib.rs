//! Hybrid system behavior: the reachable global state space of communicating
//! participants.
//!
//! Every participant is a finite automaton whose transitions send or receive
//! messages, either synchronously (a rendezvous with the partner) or
//! asynchronously (through the receiver's bounded FIFO queue), or take an
//! internal step. Composing the automata with their queues yields a finite
//! graph of global states, which this crate computes by breadth-first search.
//!
//! # Core Concepts
//!
//! - **Participant behavior**: a read-only local automaton, see [`ParticipantBehavior`]
//! - **Message queue**: per-participant FIFO of bounded capacity; capacity 0
//!   disables asynchronous delivery to that participant
//! - **Global state**: every participant's local state plus every queue
//! - **Generator**: validates the model and explores all reachable states
//!
//! # Example
//!
//! ```rust
//! use hybrid_system_behavior::{GeneratorBuilder, LocalBehavior, TransitionKind};
//!
//! let sender = LocalBehavior::builder()
//!     .initial("s0")
//!     .output("m1")
//!     .async_send("s0", "s1", "m1")
//!     .build()
//!     .unwrap();
//! let receiver = LocalBehavior::builder()
//!     .initial("s0")
//!     .input("m1")
//!     .async_receive("s0", "s1", "m1")
//!     .build()
//!     .unwrap();
//!
//! let graph = GeneratorBuilder::new()
//!     .participant("P1", sender)
//!     .participant("P2", receiver)
//!     .uniform_capacity(1)
//!     .build()
//!     .unwrap()
//!     .generate()
//!     .unwrap();
//!
//! assert_eq!(graph.initial_state().to_string(), "(P1:s0:[],P2:s0:[])");
//! assert_eq!(graph.state_count(), 3);
//!
//! let send = &graph.transitions()[0];
//! assert!(matches!(send.kind, TransitionKind::AsynchronousSend { .. }));
//! assert_eq!(graph.render_state(send.target), "(P1:s1:[],P2:s0:[m1])");
//! ```

pub mod builder;
pub mod core;
pub mod generator;
pub mod model;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, GeneratorBuilder, LocalBehaviorBuilder};
pub use core::{
    Direction, LocalAction, LocalBehavior, LocalState, LocalTransition, Message, Participant,
    ParticipantBehavior,
};
pub use generator::HybridSystemBehaviorGenerator;
pub use model::{GlobalState, HybridSystemBehavior, MessageQueue, StateId, Transition, TransitionKind};
pub use validation::{GenerateError, Violation};
