//! Server-pushed counter events.

use uuid::Uuid;

/// Event name carried by every counter event.
pub const COUNTER_EVENT_NAME: &str = "counter-event";

/// One element of the counter push stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterEvent {
    /// Unique per event (UUID v4).
    pub sequence_id: String,
    /// Always [`COUNTER_EVENT_NAME`].
    pub event_name: &'static str,
    /// Counter value, starting at 0.
    pub value: u64,
    /// Human-readable note embedding the counter value.
    pub comment: String,
}

impl CounterEvent {
    /// Builds the event for the given counter value with a fresh sequence id.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self {
            sequence_id: Uuid::new_v4().to_string(),
            event_name: COUNTER_EVENT_NAME,
            value,
            comment: format!("Counter at {value}"),
        }
    }
}
