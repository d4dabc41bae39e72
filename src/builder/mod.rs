//! Builder API for participant behaviors and generators.
//!
//! Both builders are fluent and check required fields in `build()`, so a
//! missing initial state or capacity surfaces as a [`BuildError`] instead of
//! a half-constructed model.

pub mod behavior;
pub mod error;
pub mod generator;

pub use behavior::LocalBehaviorBuilder;
pub use error::BuildError;
pub use generator::GeneratorBuilder;
