//! Validation of the participant model and of the generated graph.
//!
//! Three groups of rules:
//!
//! - input rules, evaluated before exploration starts: non-empty maps,
//!   matching participant sets, non-negative capacities, and disjoint input
//!   and output message sets across participants
//! - the rendezvous rule, evaluated during exploration: at most one
//!   synchronous transition per side for a given channel and local state
//! - closure rules, evaluated after exploration: every transition endpoint and
//!   the initial state are registered states
//!
//! Input and closure rules use `Validation` so that every violation is
//! reported at once rather than only the first.
//!
//! # Example
//!
//! ```rust
//! use hybrid_system_behavior::core::{LocalBehavior, Participant};
//! use hybrid_system_behavior::validation::{validate_input_model, GenerateError};
//! use std::collections::BTreeMap;
//!
//! let consumer = || LocalBehavior::builder().initial("s0").input("m1").build().unwrap();
//! let behaviors = BTreeMap::from([
//!     (Participant::new("P1"), consumer()),
//!     (Participant::new("P2"), consumer()),
//! ]);
//! let capacities = BTreeMap::from([(Participant::new("P1"), 1), (Participant::new("P2"), -1)]);
//!
//! let error = validate_input_model(&behaviors, &capacities).unwrap_err();
//! assert!(matches!(error, GenerateError::MalformedInput(_)));
//! assert_eq!(error.violations().len(), 2);
//! ```

pub mod graph;
pub mod rules;
pub mod violations;

pub use graph::validate_graph;
pub use rules::{
    validate_behaviors, validate_capacities, validate_equal_key_sets, validate_input_model,
    validate_rendezvous, validate_uniform_capacity, validate_uniform_model,
};
pub use violations::{GenerateError, Violation};
