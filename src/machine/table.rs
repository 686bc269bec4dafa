//! The compiled transition table.

use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use std::fmt;

use crate::builder::BuildError;
use crate::core::{Event, Guard, StateId};
use crate::machine::transition::Transition;

/// Destination and optional gate for one `(state, event kind)` pair.
pub(crate) struct TableEntry<S, E> {
    pub(crate) to: S,
    pub(crate) guard: Option<Guard<E>>,
}

/// Indexed lookup structure mapping `(state, event kind)` to a destination
/// state and optional guard. Built once at machine construction and
/// immutable thereafter.
///
/// Invariant: each `(state, event kind)` pair maps to at most one entry.
/// Compilation fails on the first duplicate declaration.
pub struct TransitionTable<S: StateId, E: Event> {
    graph: HashMap<S, HashMap<E::Kind, TableEntry<S, E>>>,
    len: usize,
}

impl<S: StateId, E: Event> TransitionTable<S, E> {
    /// Compile an ordered list of transition declarations.
    ///
    /// Declarations are indexed in the order given; the first repeated
    /// `(from, kind)` pair aborts compilation with
    /// [`BuildError::DuplicateTransition`], regardless of whether the
    /// destination or guard differ. An empty list is legal and yields a
    /// table that matches no event.
    pub(crate) fn compile(transitions: Vec<Transition<S, E>>) -> Result<Self, BuildError> {
        let mut graph: HashMap<S, HashMap<E::Kind, TableEntry<S, E>>> = HashMap::new();
        let mut len = 0;

        for transition in transitions {
            let inner = graph.entry(transition.from.clone()).or_default();
            match inner.entry(transition.kind) {
                MapEntry::Occupied(slot) => {
                    return Err(BuildError::DuplicateTransition {
                        from: format!("{:?}", transition.from),
                        event: format!("{:?}", slot.key()),
                    });
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(TableEntry {
                        to: transition.to,
                        guard: transition.guard,
                    });
                    len += 1;
                }
            }
        }

        Ok(Self { graph, len })
    }

    /// Look up the entry for `(state, kind)`, if any.
    pub(crate) fn entry(&self, state: &S, kind: &E::Kind) -> Option<&TableEntry<S, E>> {
        self.graph.get(state).and_then(|inner| inner.get(kind))
    }

    /// Number of registered transitions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has no transitions at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: StateId, E: Event> fmt::Debug for TransitionTable<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("states", &self.graph.len())
            .field("transitions", &self.len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    enum Sig {
        Open,
        Close,
    }

    struct Input(Sig);

    impl Event for Input {
        type Kind = Sig;

        fn kind(&self) -> Sig {
            self.0
        }

        fn payload(&self) -> &dyn Any {
            &()
        }
    }

    #[test]
    fn compiles_distinct_pairs() {
        let table: TransitionTable<&str, Input> = TransitionTable::compile(vec![
            Transition::new("closed", Sig::Open, "open"),
            Transition::new("open", Sig::Close, "closed"),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.entry(&"closed", &Sig::Open).is_some());
        assert!(table.entry(&"closed", &Sig::Close).is_none());
    }

    #[test]
    fn duplicate_pair_fails_even_with_different_destination() {
        let result: Result<TransitionTable<&str, Input>, _> = TransitionTable::compile(vec![
            Transition::new("closed", Sig::Open, "open"),
            Transition::new("closed", Sig::Open, "ajar"),
        ]);

        assert!(matches!(
            result,
            Err(BuildError::DuplicateTransition { .. })
        ));
    }

    #[test]
    fn duplicate_error_names_the_pair() {
        let err: BuildError = TransitionTable::<&str, Input>::compile(vec![
            Transition::new("closed", Sig::Open, "open"),
            Transition::guarded("closed", Sig::Open, "open", |_| true),
        ])
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("closed"));
        assert!(message.contains("Open"));
    }

    #[test]
    fn same_kind_from_different_states_is_fine() {
        let table: TransitionTable<&str, Input> = TransitionTable::compile(vec![
            Transition::new("a", Sig::Open, "b"),
            Transition::new("b", Sig::Open, "c"),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn table_is_debuggable() {
        let result: Result<TransitionTable<&str, Input>, _> = TransitionTable::compile(vec![
            Transition::new("closed", Sig::Open, "open"),
            Transition::new("closed", Sig::Open, "ajar"),
        ]);

        // unwrap_err needs the Ok side to be Debug.
        let err = result.unwrap_err();
        assert!(matches!(err, BuildError::DuplicateTransition { .. }));

        let table: TransitionTable<&str, Input> =
            TransitionTable::compile(vec![Transition::new("a", Sig::Open, "b")]).unwrap();
        let rendered = format!("{table:?}");
        assert!(rendered.contains("TransitionTable"));
        assert!(rendered.contains("transitions: 1"));
    }

    #[test]
    fn empty_table_is_legal() {
        let table: TransitionTable<&str, Input> = TransitionTable::compile(Vec::new()).unwrap();

        assert!(table.is_empty());
        assert!(table.entry(&"anywhere", &Sig::Open).is_none());
    }

    #[test]
    fn entry_carries_destination_and_guard() {
        let table: TransitionTable<&str, Input> = TransitionTable::compile(vec![
            Transition::guarded("a", Sig::Open, "b", |_| false),
        ])
        .unwrap();

        let entry = table.entry(&"a", &Sig::Open).unwrap();
        assert_eq!(entry.to, "b");
        assert!(entry.guard.is_some());
    }
}
