//! Event infrastructure for domain event publishing.
//!
//! The core itself performs no I/O; it only defines the event types and
//! the envelope shape that collaborators (storage, notification) persist
//! and route:
//! - `EventId` - Unique identifier for events (deduplication)
//! - `EventEnvelope` - Transport wrapper for domain events
//! - `DomainEvent` - Trait that all domain events implement
//! - `domain_event!` - Macro to simplify DomainEvent implementations

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Trait that all domain events must implement.
///
/// Provides the contract for event identification, routing, ordering,
/// and versioning. Use the `domain_event!` macro to implement this trait
/// with minimal boilerplate.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "analysis.synthesis_completed").
    /// Used for routing and filtering.
    fn event_type(&self) -> &'static str;

    /// Returns the schema version number.
    fn schema_version(&self) -> u32;

    /// Returns the ID of the aggregate that emitted this event.
    fn aggregate_id(&self) -> String;

    /// Returns the type of aggregate (e.g., "Analysis").
    fn aggregate_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;

    /// Returns the unique ID for this event instance.
    fn event_id(&self) -> EventId;
}

/// Extension trait that provides `to_envelope()` for serializable domain events.
///
/// Automatically implemented for any type that implements both
/// `DomainEvent` and `Serialize`, so event authors never write envelope
/// plumbing by hand.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    /// Converts this domain event into an `EventEnvelope` for transport.
    fn to_envelope(&self) -> EventEnvelope {
        EventEnvelope {
            event_id: self.event_id(),
            event_type: self.event_type().to_string(),
            schema_version: self.schema_version(),
            aggregate_id: self.aggregate_id(),
            aggregate_type: self.aggregate_type().to_string(),
            occurred_at: self.occurred_at(),
            payload: serde_json::to_value(self)
                .expect("Event serialization should never fail for well-formed events"),
        }
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Macro to implement DomainEvent trait with minimal boilerplate.
///
/// # Example
///
/// ```ignore
/// domain_event!(
///     SynthesisCompleted,
///     event_type = "analysis.synthesis_completed",
///     schema_version = 1,
///     aggregate_id = analysis_id,
///     aggregate_type = "Analysis",
///     occurred_at = completed_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        schema_version = $schema_version:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn schema_version(&self) -> u32 {
                $schema_version
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

// Re-export the macro
pub use domain_event;

/// Unique identifier for events (used for deduplication).
///
/// Uses a String internally to allow for various ID formats (UUID, ULID,
/// etc.) while maintaining serializability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates an EventId from an existing string.
    ///
    /// No validation is performed - any non-empty string is accepted.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport envelope for domain events.
///
/// Wraps event-specific data with the fields needed for:
/// - Routing (event_type)
/// - Deduplication (event_id)
/// - Correlation (aggregate_id)
/// - Ordering (occurred_at)
/// - Versioning (schema_version)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique ID for this event instance.
    pub event_id: EventId,

    /// Event type for routing (e.g., "analysis.synthesis_completed").
    pub event_type: String,

    /// Schema version number.
    pub schema_version: u32,

    /// ID of the aggregate that emitted this event.
    pub aggregate_id: String,

    /// Type of aggregate (e.g., "Analysis").
    pub aggregate_type: String,

    /// When the event occurred.
    pub occurred_at: Timestamp,

    /// Event-specific payload as JSON.
    pub payload: JsonValue,
}

impl EventEnvelope {
    /// Creates an envelope from a domain event with automatic serialization.
    pub fn from_event<T>(event: &T) -> Self
    where
        T: DomainEvent + Serialize,
    {
        event.to_envelope()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AnalysisId;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct ProbeFired {
        event_id: EventId,
        analysis_id: AnalysisId,
        fired_at: Timestamp,
    }

    domain_event!(
        ProbeFired,
        event_type = "analysis.probe_fired",
        schema_version = 1,
        aggregate_id = analysis_id,
        aggregate_type = "Analysis",
        occurred_at = fired_at,
        event_id = event_id
    );

    fn probe() -> ProbeFired {
        ProbeFired {
            event_id: EventId::from_string("evt-probe-1"),
            analysis_id: AnalysisId::new(),
            fired_at: Timestamp::now(),
        }
    }

    #[test]
    fn macro_implements_domain_event() {
        let event = probe();
        assert_eq!(event.event_type(), "analysis.probe_fired");
        assert_eq!(event.schema_version(), 1);
        assert_eq!(event.aggregate_type(), "Analysis");
        assert_eq!(event.aggregate_id(), event.analysis_id.to_string());
    }

    #[test]
    fn to_envelope_copies_identity_fields() {
        let event = probe();
        let envelope = event.to_envelope();

        assert_eq!(envelope.event_id.as_str(), "evt-probe-1");
        assert_eq!(envelope.event_type, "analysis.probe_fired");
        assert_eq!(envelope.aggregate_id, event.analysis_id.to_string());
        assert_eq!(envelope.occurred_at, event.fired_at);
    }

    #[test]
    fn envelope_payload_contains_event_fields() {
        let event = probe();
        let envelope = EventEnvelope::from_event(&event);

        assert_eq!(
            envelope.payload["event_id"],
            serde_json::json!("evt-probe-1")
        );
        assert!(envelope.payload["analysis_id"].is_string());
    }

    #[test]
    fn envelope_serialization_round_trip() {
        let envelope = probe().to_envelope();
        let json = serde_json::to_string(&envelope).unwrap();
        let restored: EventEnvelope = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.event_id, envelope.event_id);
        assert_eq!(restored.event_type, envelope.event_type);
        assert_eq!(restored.payload, envelope.payload);
    }

    #[test]
    fn event_id_new_is_unique() {
        assert_ne!(EventId::new(), EventId::new());
    }
}
