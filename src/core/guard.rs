//! Guard callbacks that gate transitions.

use std::fmt;
use std::sync::Arc;

/// A caller-supplied decision function over events.
///
/// A guard attached to a transition is consulted each time that transition is
/// resolved: the transition proceeds iff the guard returns `true`. The engine
/// treats guards as opaque black boxes — they may capture external mutable
/// state and have side effects; only their boolean return matters.
///
/// The unhandled-event hook passed to
/// [`MachineBuilder::on_unhandled`](crate::MachineBuilder::on_unhandled) is
/// Guard-shaped too; there the return value is discarded and the call exists
/// purely for its side effect (logging, metrics, dead-lettering).
///
/// # Example
///
/// ```rust
/// use transit::{Event, Guard};
/// use std::any::Any;
///
/// struct Deposit {
///     amount: u64,
/// }
///
/// impl Event for Deposit {
///     type Kind = &'static str;
///
///     fn kind(&self) -> &'static str {
///         "deposit"
///     }
///
///     fn payload(&self) -> &dyn Any {
///         &self.amount
///     }
/// }
///
/// let non_zero = Guard::new(|e: &Deposit| e.amount > 0);
///
/// assert!(non_zero.check(&Deposit { amount: 50 }));
/// assert!(!non_zero.check(&Deposit { amount: 0 }));
/// ```
pub struct Guard<E> {
    decide: Arc<dyn Fn(&E) -> bool + Send + Sync>,
}

impl<E> Guard<E> {
    /// Wrap a decision function.
    pub fn new<F>(decide: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Guard {
            decide: Arc::new(decide),
        }
    }

    /// Ask the guard whether the event should be accepted.
    pub fn check(&self, event: &E) -> bool {
        (self.decide)(event)
    }
}

impl<E> Clone for Guard<E> {
    fn clone(&self) -> Self {
        Guard {
            decide: Arc::clone(&self.decide),
        }
    }
}

impl<E> fmt::Debug for Guard<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
