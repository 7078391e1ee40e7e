//! Analytics sink
//!
//! Clients post free-form JSON events; the service only records them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Errors raised while recording an analytics event
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// The event could not be encoded for the sink
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The sink refused or dropped the event
    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}

/// A client analytics event: any JSON object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalyticsEvent {
    fields: Map<String, Value>,
}

impl AnalyticsEvent {
    /// Wrap an already-parsed JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Event name, taken from the `event` field when it is a string
    pub fn name(&self) -> Option<&str> {
        self.fields.get("event").and_then(Value::as_str)
    }

    /// Raw field access
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the event has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Destination for analytics events
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Record a single event
    async fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}

/// Writes every event to the log at `info`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait]
impl AnalyticsSink for TracingSink {
    async fn record(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        let payload = serde_json::to_string(&event)?;
        tracing::info!(
            event = event.name().unwrap_or("unnamed"),
            payload = %payload,
            "Analytics event"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: Value) -> AnalyticsEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_event_name() {
        let e = event(json!({"event": "tap", "target": "buy-button"}));
        assert_eq!(e.name(), Some("tap"));
        assert_eq!(e.get("target"), Some(&json!("buy-button")));
        assert_eq!(e.len(), 2);
    }

    #[test]
    fn test_event_without_name() {
        let e = event(json!({"screen": "/cart"}));
        assert_eq!(e.name(), None);

        let e = event(json!({"event": 42}));
        assert_eq!(e.name(), None);
    }

    #[test]
    fn test_event_must_be_object() {
        assert!(serde_json::from_value::<AnalyticsEvent>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<AnalyticsEvent>(json!("tap")).is_err());
    }

    #[test]
    fn test_event_serializes_flat() {
        let e = event(json!({"event": "view"}));
        assert_eq!(serde_json::to_string(&e).unwrap(), r#"{"event":"view"}"#);
    }

    #[tokio::test]
    async fn test_tracing_sink_accepts_events() {
        let sink = TracingSink;
        assert!(sink.record(AnalyticsEvent::default()).await.is_ok());
        assert!(sink
            .record(event(json!({"event": "purchase", "total": 19.99})))
            .await
            .is_ok());
    }
}
