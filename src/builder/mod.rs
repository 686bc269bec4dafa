//! Construction API for machines and transitions.
//!
//! Construction is the only fallible part of the engine: a duplicate
//! `(state, event kind)` declaration, or a builder missing a required field,
//! fails the build and yields no machine. Everything after a successful
//! build is infallible dispatch.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;
