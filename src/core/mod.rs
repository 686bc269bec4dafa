//! Core vocabulary of the engine.
//!
//! This module defines the types the dispatcher is written against:
//! - Identifier traits for states and event kinds
//! - The `Event` capability (kind extraction + opaque payload)
//! - Guard callbacks that gate transitions
//! - The transition audit log

mod event;
mod guard;
mod log;
mod state;

pub use event::Event;
pub use guard::Guard;
pub use log::{TransitionLog, TransitionRecord};
pub use state::{EventKind, StateId};
