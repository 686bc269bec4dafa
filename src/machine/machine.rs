//! The dispatcher: a machine instance holding the current state.

use chrono::Utc;
use std::fmt;
use tracing::{debug, trace};

use crate::core::{Event, Guard, StateId, TransitionLog, TransitionRecord};
use crate::machine::table::TransitionTable;

/// A running state machine: a compiled [`TransitionTable`], the current
/// state, an optional unhandled-event hook, and the transition audit log.
///
/// Machines are constructed through
/// [`MachineBuilder`](crate::MachineBuilder); once built, the table never
/// changes and the current state moves only through [`emit`](Machine::emit).
///
/// # Threading contract
///
/// The machine is single-threaded by design: `emit` takes `&mut self`, so
/// the borrow checker already rules out unsynchronized concurrent dispatch.
/// Callers that need to feed a machine from several threads must serialize
/// access themselves, e.g. by funnelling events through one channel into a
/// single owning task.
///
/// # Example
///
/// ```rust
/// use transit::{Event, MachineBuilder, Transition};
/// use std::any::Any;
///
/// #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
/// enum Sig {
///     Coin,
///     Push,
/// }
///
/// struct Input(Sig);
///
/// impl Event for Input {
///     type Kind = Sig;
///     fn kind(&self) -> Sig {
///         self.0
///     }
///     fn payload(&self) -> &dyn Any {
///         &()
///     }
/// }
///
/// let mut turnstile = MachineBuilder::new()
///     .initial("locked")
///     .transition(Transition::new("locked", Sig::Coin, "unlocked"))
///     .transition(Transition::new("unlocked", Sig::Push, "locked"))
///     .build()
///     .unwrap();
///
/// assert!(turnstile.emit(&Input(Sig::Coin)));
/// assert_eq!(turnstile.current_state(), &"unlocked");
///
/// // No transition for Coin while unlocked: rejected, state unchanged.
/// assert!(!turnstile.emit(&Input(Sig::Coin)));
/// assert_eq!(turnstile.current_state(), &"unlocked");
/// ```
pub struct Machine<S: StateId, E: Event> {
    table: TransitionTable<S, E>,
    current: S,
    unhandled: Option<Guard<E>>,
    log: TransitionLog<S, E::Kind>,
}

impl<S: StateId, E: Event> Machine<S, E> {
    pub(crate) fn new(
        table: TransitionTable<S, E>,
        initial: S,
        unhandled: Option<Guard<E>>,
    ) -> Self {
        Self {
            table,
            current: initial,
            unhandled,
            log: TransitionLog::new(),
        }
    }

    /// Present an event to the machine and attempt to advance its state.
    ///
    /// Resolution, in order:
    ///
    /// 1. No transition is registered for the current state and this event's
    ///    kind: the unhandled-event hook (if configured) is invoked once with
    ///    the event, its return value is discarded, and `emit` returns
    ///    `false` with the state unchanged.
    /// 2. A transition is registered and carries a guard: the guard decides.
    ///    Accept moves the machine and returns `true`; reject returns
    ///    `false` with the state unchanged. The unhandled-event hook is
    ///    *not* invoked on guard rejection — a declined transition is
    ///    distinct from a missing one.
    /// 3. A transition is registered with no guard: the machine moves
    ///    unconditionally and `emit` returns `true`.
    ///
    /// `emit` never fails for a well-formed event; rejection is communicated
    /// purely through the `false` return. State mutation is all-or-nothing
    /// per call.
    pub fn emit(&mut self, event: &E) -> bool {
        let kind = event.kind();

        let next = match self.table.entry(&self.current, &kind) {
            None => {
                debug!(state = ?self.current, event = ?kind, "unhandled event");
                if let Some(hook) = &self.unhandled {
                    let _ = hook.check(event);
                }
                return false;
            }
            Some(entry) => {
                if let Some(guard) = &entry.guard {
                    if !guard.check(event) {
                        trace!(state = ?self.current, event = ?kind, "guard declined transition");
                        return false;
                    }
                }
                entry.to.clone()
            }
        };

        debug!(from = ?self.current, to = ?next, event = ?kind, "state transition");
        let from = std::mem::replace(&mut self.current, next.clone());
        self.log = self.log.record(TransitionRecord {
            from,
            to: next,
            event: kind,
            timestamp: Utc::now(),
        });
        true
    }

    /// The current state. Pure read: reflects the latest successful
    /// transition, or the initial state if none has occurred.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The compiled transition table.
    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    /// The audit log of successful transitions, oldest first.
    pub fn log(&self) -> &TransitionLog<S, E::Kind> {
        &self.log
    }
}

impl<S: StateId, E: Event> fmt::Debug for Machine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("transitions", &self.table.len())
            .finish_non_exhaustive()
    }
}
