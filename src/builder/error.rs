//! Construction errors for machines and transitions.

use thiserror::Error;

/// Errors that can occur while building a machine or a transition.
///
/// Construction is the only fallible part of the engine: once a machine is
/// built, event dispatch communicates rejection through its boolean result
/// and never errors.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("transition event kind not specified. Call .on(kind)")]
    MissingEventKind,

    #[error("transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("duplicate transition: state {from} already handles event {event}")]
    DuplicateTransition {
        /// Debug rendering of the conflicting source state.
        from: String,
        /// Debug rendering of the conflicting event kind.
        event: String,
    },
}
