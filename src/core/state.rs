//! Identifier traits for states and event kinds.
//!
//! States and event kinds are "dumb labels": opaque values with identity and
//! nothing else. Any type that can serve as a map key qualifies — integers,
//! static strings, or fieldless enums (see the [`id_enum!`](crate::id_enum)
//! macro for the enum case).

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for state identifiers.
///
/// Blanket-implemented for every conforming type; there is nothing to
/// implement by hand. States carry no behavior — the engine only ever
/// compares, hashes, clones, and debug-prints them.
///
/// # Example
///
/// ```rust
/// use transit::StateId;
///
/// fn assert_state<S: StateId>(_: S) {}
///
/// assert_state(7u32);
/// assert_state("connected");
/// ```
pub trait StateId: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync + 'static> StateId for T {}

/// Marker trait for event-type discriminators.
///
/// Identical in shape to [`StateId`]; kept as a separate trait so signatures
/// read as what they mean. An event kind is the lookup key extracted from an
/// [`Event`](crate::Event), distinct from the event value itself.
pub trait EventKind: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync + 'static> EventKind for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn takes_state<S: StateId>(s: S) -> S {
        s
    }

    fn takes_kind<K: EventKind>(k: K) -> K {
        k
    }

    #[test]
    fn integers_are_state_ids() {
        assert_eq!(takes_state(42u64), 42u64);
        assert_eq!(takes_state(-1i32), -1i32);
    }

    #[test]
    fn static_strings_are_state_ids() {
        assert_eq!(takes_state("idle"), "idle");
    }

    #[test]
    fn owned_strings_are_state_ids() {
        assert_eq!(takes_state(String::from("idle")), "idle");
    }

    #[test]
    fn enums_are_event_kinds() {
        #[derive(Clone, PartialEq, Eq, Hash, Debug)]
        enum Kind {
            Tick,
        }

        assert_eq!(takes_kind(Kind::Tick), Kind::Tick);
    }
}
