//! The compiled table and the dispatcher that runs against it.
//!
//! Construction happens once, through the builder; after that the table is
//! immutable and a machine only ever mutates its current-state field.

mod machine;
mod table;
mod transition;

pub use machine::Machine;
pub use table::TransitionTable;
pub use transition::Transition;
