//! Macros for declaring identifier enums.

/// Declare a fieldless identifier enum suitable for use as a state or event
/// kind.
///
/// Expands to an enum deriving `Copy`, `Clone`, `PartialEq`, `Eq`, `Hash`,
/// `Debug`, `serde::Serialize`, and `serde::Deserialize`, plus an inherent
/// `name()` method returning the variant name for diagnostics.
///
/// # Example
///
/// ```rust
/// use transit::id_enum;
///
/// id_enum! {
///     pub enum DoorState {
///         Open,
///         Closed,
///     }
/// }
///
/// id_enum! {
///     pub enum DoorEvent {
///         Push,
///         Pull,
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// assert_ne!(DoorEvent::Push, DoorEvent::Pull);
/// ```
#[macro_export]
macro_rules! id_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// The variant name, for diagnostics and logging.
            $vis fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    id_enum! {
        enum Color {
            Red,
            Amber,
            Green,
        }
    }

    #[test]
    fn generated_enum_names_its_variants() {
        assert_eq!(Color::Red.name(), "Red");
        assert_eq!(Color::Amber.name(), "Amber");
        assert_eq!(Color::Green.name(), "Green");
    }

    #[test]
    fn generated_enum_is_a_usable_identifier() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(Color::Red, 1);
        map.insert(Color::Green, 2);

        assert_eq!(map.get(&Color::Red), Some(&1));
        assert_ne!(Color::Red, Color::Green);
    }

    #[test]
    fn generated_enum_supports_visibility_and_attributes() {
        id_enum! {
            /// States of a job.
            pub enum JobState {
                Queued,
                Active,
            }
        }

        assert_eq!(JobState::Queued.name(), "Queued");
    }

    #[test]
    fn generated_enum_serializes() {
        let json = serde_json::to_string(&Color::Amber).unwrap();
        assert_eq!(json, "\"Amber\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Amber);
    }
}
