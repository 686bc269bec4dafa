//! Transition audit trail.
//!
//! Every successful transition a machine performs is appended to an
//! immutable, ordered log, so embedders get an auditable record of how the
//! machine reached its current state. Rejected and unhandled events are not
//! recorded — the log mirrors state changes, nothing else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::state::{EventKind, StateId};

/// Record of a single successful transition.
///
/// # Example
///
/// ```rust
/// use transit::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "locked",
///     to: "unlocked",
///     event: "coin",
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.from, "locked");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, K: Serialize",
    deserialize = "S: Deserialize<'de>, K: Deserialize<'de>"
))]
pub struct TransitionRecord<S: StateId, K: EventKind> {
    /// The state transitioned from.
    pub from: S,
    /// The state transitioned to.
    pub to: S,
    /// The kind of event that triggered the transition.
    pub event: K,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of successful transitions.
///
/// The log is immutable: [`record`](TransitionLog::record) returns a new log
/// with the entry appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use transit::{TransitionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: "red",
///     to: "green",
///     event: "timer",
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.path(), vec![&"red", &"green"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, K: Serialize",
    deserialize = "S: Deserialize<'de>, K: Deserialize<'de>"
))]
pub struct TransitionLog<S: StateId, K: EventKind> {
    records: Vec<TransitionRecord<S, K>>,
}

impl<S: StateId, K: EventKind> Default for TransitionLog<S, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId, K: EventKind> TransitionLog<S, K> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log.
    ///
    /// Pure: the receiver is left unchanged.
    pub fn record(&self, record: TransitionRecord<S, K>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The sequence of states traversed: the origin of the first record,
    /// then the destination of each record in order.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    ///
    /// `None` when the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => {
                let elapsed = last.timestamp.signed_duration_since(first.timestamp);
                elapsed.to_std().ok()
            }
            _ => None,
        }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord<S, K>] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &'static str, to: &'static str) -> TransitionRecord<&'static str, u8> {
        TransitionRecord {
            from,
            to,
            event: 0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log: TransitionLog<&'static str, u8> = TransitionLog::new();
        assert!(log.records().is_empty());
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_is_pure() {
        let log = TransitionLog::new();
        let appended = log.record(record("a", "b"));

        assert_eq!(log.records().len(), 0);
        assert_eq!(appended.records().len(), 1);
    }

    #[test]
    fn path_traces_states_in_order() {
        let log = TransitionLog::new()
            .record(record("a", "b"))
            .record(record("b", "c"));

        assert_eq!(log.path(), vec![&"a", &"b", &"c"]);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let later = start + chrono::Duration::milliseconds(25);

        let log = TransitionLog::new()
            .record(TransitionRecord {
                from: 1u8,
                to: 2u8,
                event: 0u8,
                timestamp: start,
            })
            .record(TransitionRecord {
                from: 2u8,
                to: 3u8,
                event: 0u8,
                timestamp: later,
            });

        assert_eq!(log.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_record_has_zero_duration() {
        let log = TransitionLog::new().record(record("a", "b"));
        assert_eq!(log.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn log_round_trips_through_serde() {
        let log = TransitionLog::new()
            .record(record("a", "b"))
            .record(record("b", "a"));

        let json = serde_json::to_string(&log).unwrap();
        // Owned states on the way back in: borrowing from the JSON buffer
        // would fall short of StateId's 'static bound.
        let back: TransitionLog<String, u8> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.records().len(), 2);
        let path: Vec<&str> = back.path().into_iter().map(String::as_str).collect();
        assert_eq!(path, vec!["a", "b", "a"]);
    }
}
