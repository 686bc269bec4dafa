//! Transition declarations.

use crate::core::{Event, Guard, StateId};

/// A single transition edge: when the machine sits in `from` and an event of
/// kind `kind` arrives, move to `to` — unconditionally if `guard` is `None`,
/// otherwise only when the guard accepts the event.
///
/// Transitions are declared once, handed to the builder, and never mutated
/// afterwards.
///
/// # Example
///
/// ```rust
/// use transit::Transition;
/// # use transit::Event;
/// # use std::any::Any;
/// # struct Coin;
/// # impl Event for Coin {
/// #     type Kind = &'static str;
/// #     fn kind(&self) -> &'static str { "coin" }
/// #     fn payload(&self) -> &dyn Any { &() }
/// # }
///
/// let unlock: Transition<&str, Coin> = Transition::new("locked", "coin", "unlocked");
/// assert_eq!(unlock.from, "locked");
/// assert!(unlock.guard.is_none());
/// ```
pub struct Transition<S: StateId, E: Event> {
    /// Source state.
    pub from: S,
    /// Triggering event kind.
    pub kind: E::Kind,
    /// Destination state.
    pub to: S,
    /// Optional gate; `None` means the transition is unconditional.
    pub guard: Option<Guard<E>>,
}

impl<S: StateId, E: Event> Transition<S, E> {
    /// Declare an unconditional transition.
    pub fn new(from: S, kind: E::Kind, to: S) -> Self {
        Self {
            from,
            kind,
            to,
            guard: None,
        }
    }

    /// Declare a guarded transition.
    pub fn guarded<F>(from: S, kind: E::Kind, to: S, guard: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self {
            from,
            kind,
            to,
            guard: Some(Guard::new(guard)),
        }
    }

    /// Would this transition accept `event`? Matches the event's kind and,
    /// when a guard is present, consults it.
    pub fn accepts(&self, event: &E) -> bool {
        if event.kind() != self.kind {
            return false;
        }
        self.guard.as_ref().map_or(true, |g| g.check(event))
    }
}

impl<S: StateId, E: Event> Clone for Transition<S, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            kind: self.kind.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    enum Sig {
        Go,
        Stop,
    }

    struct Input {
        sig: Sig,
        speed: u32,
    }

    impl Event for Input {
        type Kind = Sig;

        fn kind(&self) -> Sig {
            self.sig
        }

        fn payload(&self) -> &dyn Any {
            &self.speed
        }
    }

    #[test]
    fn accepts_requires_matching_kind() {
        let t: Transition<u8, Input> = Transition::new(0, Sig::Go, 1);

        assert!(t.accepts(&Input {
            sig: Sig::Go,
            speed: 0
        }));
        assert!(!t.accepts(&Input {
            sig: Sig::Stop,
            speed: 0
        }));
    }

    #[test]
    fn accepts_consults_the_guard() {
        let t: Transition<u8, Input> =
            Transition::guarded(0, Sig::Go, 1, |e: &Input| e.speed < 100);

        assert!(t.accepts(&Input {
            sig: Sig::Go,
            speed: 50
        }));
        assert!(!t.accepts(&Input {
            sig: Sig::Go,
            speed: 150
        }));
    }

    #[test]
    fn self_loops_are_ordinary_transitions() {
        let t: Transition<u8, Input> = Transition::new(3, Sig::Go, 3);

        assert_eq!(t.from, t.to);
        assert!(t.accepts(&Input {
            sig: Sig::Go,
            speed: 0
        }));
    }
}
