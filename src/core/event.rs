//! The `Event` capability consumed by the dispatcher.

use super::state::EventKind;
use std::any::Any;

/// An event presented to a machine.
///
/// The engine needs exactly two things from an event: its kind, used as the
/// transition-table lookup key, and an opaque payload the embedding
/// application can downcast itself. The engine never inspects the payload.
///
/// # Example
///
/// ```rust
/// use transit::Event;
/// use std::any::Any;
///
/// #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
/// enum Signal {
///     Data,
/// }
///
/// struct DataFrame {
///     bytes: Vec<u8>,
/// }
///
/// impl Event for DataFrame {
///     type Kind = Signal;
///
///     fn kind(&self) -> Signal {
///         Signal::Data
///     }
///
///     fn payload(&self) -> &dyn Any {
///         &self.bytes
///     }
/// }
///
/// let frame = DataFrame { bytes: vec![1, 2, 3] };
/// let bytes = frame.payload().downcast_ref::<Vec<u8>>().unwrap();
/// assert_eq!(bytes.len(), 3);
/// ```
pub trait Event {
    /// The discriminator type used for table lookup.
    type Kind: EventKind;

    /// The event's kind, extracted for table lookup.
    fn kind(&self) -> Self::Kind;

    /// The underlying domain payload, opaque to the engine.
    fn payload(&self) -> &dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    enum Kind {
        Login,
        Logout,
    }

    struct Login {
        user: String,
    }

    impl Event for Login {
        type Kind = Kind;

        fn kind(&self) -> Kind {
            Kind::Login
        }

        fn payload(&self) -> &dyn Any {
            &self.user
        }
    }

    #[test]
    fn kind_is_extracted() {
        let event = Login {
            user: "alice".into(),
        };
        assert_eq!(event.kind(), Kind::Login);
        assert_ne!(event.kind(), Kind::Logout);
    }

    #[test]
    fn payload_downcasts_to_concrete_type() {
        let event = Login {
            user: "alice".into(),
        };

        let user = event.payload().downcast_ref::<String>();
        assert_eq!(user.map(String::as_str), Some("alice"));
    }

    #[test]
    fn payload_downcast_to_wrong_type_fails() {
        let event = Login { user: "bob".into() };

        assert!(event.payload().downcast_ref::<u64>().is_none());
    }
}
