//! Builder for machine instances.

use crate::builder::error::BuildError;
use crate::core::{Event, Guard, StateId};
use crate::machine::{Machine, Transition, TransitionTable};

/// Builder for [`Machine`] instances with a fluent API.
///
/// The initial state is required; transitions are optional — a machine built
/// with none is legal and simply rejects every event (invoking the
/// unhandled-event hook each time, if one is configured).
///
/// # Example
///
/// ```rust
/// use transit::{Event, MachineBuilder, Transition};
/// use std::any::Any;
///
/// #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
/// enum Sig {
///     Advance,
/// }
///
/// struct Input;
///
/// impl Event for Input {
///     type Kind = Sig;
///     fn kind(&self) -> Sig {
///         Sig::Advance
///     }
///     fn payload(&self) -> &dyn Any {
///         &()
///     }
/// }
///
/// let mut machine = MachineBuilder::new()
///     .initial(0u8)
///     .transition(Transition::new(0, Sig::Advance, 1))
///     .transition(Transition::new(1, Sig::Advance, 2))
///     .build()
///     .unwrap();
///
/// machine.emit(&Input);
/// assert_eq!(machine.current_state(), &1);
/// ```
pub struct MachineBuilder<S: StateId, E: Event> {
    initial: Option<S>,
    transitions: Vec<Transition<S, E>>,
    unhandled: Option<Guard<E>>,
}

impl<S: StateId, E: Event> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            unhandled: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition declaration.
    pub fn transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add several transition declarations at once, preserving order.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, E>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Install a hook invoked whenever an event arrives for which the
    /// current state has no registered transition. The hook is called for
    /// its side effect only; its return value is discarded. It is *not*
    /// called when a registered transition's guard declines.
    pub fn on_unhandled<F>(mut self, hook: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.unhandled = Some(Guard::new(hook));
        self
    }

    /// Compile the table and produce the machine.
    ///
    /// Fails with [`BuildError::MissingInitialState`] when no initial state
    /// was given, or [`BuildError::DuplicateTransition`] when two
    /// declarations share a `(from, kind)` pair. On failure no machine is
    /// produced and nothing outside the builder is touched.
    pub fn build(self) -> Result<Machine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let table = TransitionTable::compile(self.transitions)?;
        Ok(Machine::new(table, initial, self.unhandled))
    }
}

impl<S: StateId, E: Event> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
