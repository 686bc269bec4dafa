//! Fluent builder for transition declarations.

use crate::builder::error::BuildError;
use crate::core::{Event, Guard, StateId};
use crate::machine::Transition;

/// Builder for a single [`Transition`] with a fluent API.
///
/// [`Transition::new`] and [`Transition::guarded`] cover the common cases
/// directly; the builder form reads better when transitions are assembled
/// piecemeal or generated from configuration.
///
/// # Example
///
/// ```rust
/// use transit::{Event, Transition, TransitionBuilder};
/// use std::any::Any;
///
/// struct Coin {
///     value: u32,
/// }
///
/// impl Event for Coin {
///     type Kind = &'static str;
///     fn kind(&self) -> &'static str {
///         "coin"
///     }
///     fn payload(&self) -> &dyn Any {
///         &self.value
///     }
/// }
///
/// let unlock: Transition<&str, Coin> = TransitionBuilder::new()
///     .from("locked")
///     .on("coin")
///     .to("unlocked")
///     .when(|c: &Coin| c.value >= 25)
///     .build()
///     .unwrap();
///
/// assert!(unlock.accepts(&Coin { value: 25 }));
/// assert!(!unlock.accepts(&Coin { value: 5 }));
/// ```
pub struct TransitionBuilder<S: StateId, E: Event> {
    from: Option<S>,
    kind: Option<E::Kind>,
    to: Option<S>,
    guard: Option<Guard<E>>,
}

impl<S: StateId, E: Event> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            kind: None,
            to: None,
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event kind (required).
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Attach a guard (optional).
    pub fn guard(mut self, guard: Guard<E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Attach a guard from a closure (optional).
    pub fn when<F>(mut self, decide: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(decide));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let kind = self.kind.ok_or(BuildError::MissingEventKind)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            kind,
            to,
            guard: self.guard,
        })
    }
}

impl<S: StateId, E: Event> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
