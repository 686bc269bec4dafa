//! Transit: an embeddable, table-driven finite state machine engine.
//!
//! Transit tracks a single "current state" and advances it in response to
//! typed events, driven by a declarative transition table built once at
//! construction time. It is a building block for protocol handlers, workflow
//! engines, and UI controllers that want explicit, auditable state
//! transitions instead of ad hoc conditional branching.
//!
//! # Core Concepts
//!
//! - **States and event kinds**: opaque, comparable, hashable identifiers
//!   supplied by the embedder ([`StateId`], [`EventKind`])
//! - **Events**: values exposing a kind for table lookup and an opaque
//!   payload the embedder downcasts itself ([`Event`])
//! - **Guards**: caller-supplied decision functions that gate individual
//!   transitions ([`Guard`])
//! - **The machine**: compiled table plus current state, advanced through
//!   [`Machine::emit`], audited through [`Machine::log`]
//!
//! # Example
//!
//! ```rust
//! use transit::{id_enum, Event, Machine, MachineBuilder, Transition};
//! use std::any::Any;
//!
//! id_enum! {
//!     pub enum DoorState {
//!         Open,
//!         Closed,
//!     }
//! }
//!
//! id_enum! {
//!     pub enum DoorEvent {
//!         Push,
//!         Pull,
//!     }
//! }
//!
//! struct DoorInput {
//!     event: DoorEvent,
//! }
//!
//! impl Event for DoorInput {
//!     type Kind = DoorEvent;
//!
//!     fn kind(&self) -> DoorEvent {
//!         self.event
//!     }
//!
//!     fn payload(&self) -> &dyn Any {
//!         &()
//!     }
//! }
//!
//! let mut door: Machine<DoorState, DoorInput> = MachineBuilder::new()
//!     .initial(DoorState::Closed)
//!     .transition(Transition::new(DoorState::Closed, DoorEvent::Pull, DoorState::Open))
//!     .transition(Transition::new(DoorState::Open, DoorEvent::Push, DoorState::Closed))
//!     .build()
//!     .unwrap();
//!
//! assert!(door.emit(&DoorInput { event: DoorEvent::Pull }));
//! assert_eq!(door.current_state(), &DoorState::Open);
//!
//! // Pulling an open door is not in the table: rejected, state unchanged.
//! assert!(!door.emit(&DoorInput { event: DoorEvent::Pull }));
//! assert_eq!(door.current_state(), &DoorState::Open);
//! ```
//!
//! # Threading
//!
//! Machines are single-threaded by contract. [`Machine::emit`] takes
//! `&mut self`, so the borrow checker rules out unsynchronized concurrent
//! dispatch; callers needing multi-threaded access must funnel events
//! through their own serialization discipline (a channel into one owning
//! task, a mutex around the machine).
//!
//! # Callbacks
//!
//! Guards and the unhandled-event hook are opaque black boxes: they may
//! capture external mutable state and have side effects. The engine only
//! looks at a guard's boolean return, and discards the hook's return
//! entirely.

pub mod builder;
pub mod core;
pub mod machine;

// Re-export the working set.
pub use self::builder::{BuildError, MachineBuilder, TransitionBuilder};
pub use self::core::{Event, EventKind, Guard, StateId, TransitionLog, TransitionRecord};
pub use self::machine::{Machine, Transition, TransitionTable};
