// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostic report.
//!
//! A report is a JSON document with collection metadata, every buffered
//! lifecycle event (timestamps relative to collection start) and per-type
//! event counts.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ToastEvent;

// =============================================================================
// Report Metadata
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    /// Version of `iced_toast` that generated the report
    pub crate_version: String,
    /// When collection started (RFC 3339)
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

// =============================================================================
// Serializable Event
// =============================================================================

/// An event with its timestamp made relative to collection start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: ToastEvent,
}

impl SerializableEvent {
    /// Events recorded before `collection_start` get a zero offset.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(event_timestamp: Instant, collection_start: Instant, kind: ToastEvent) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

// =============================================================================
// Report Summary
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Count of events by type (e.g., `"created": 4`, `"expired": 3`)
    pub event_counts: BTreeMap<String, usize>,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut event_counts = BTreeMap::new();
        for event in events {
            *event_counts.entry(event.kind.name().to_string()).or_insert(0) += 1;
        }
        Self { event_counts }
    }
}

// =============================================================================
// Diagnostic Report
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
    pub summary: ReportSummary,
}

impl DiagnosticReport {
    /// Creates a new diagnostic report with summary computed automatically.
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            events,
            summary,
        }
    }

    /// Exports the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastId;
    use std::time::Duration;

    fn event(kind: ToastEvent) -> SerializableEvent {
        let start = Instant::now();
        SerializableEvent::new(start + Duration::from_millis(25), start, kind)
    }

    #[test]
    fn serializable_event_is_relative_to_start() {
        let id = ToastId::from_raw(1);
        let serialized = event(ToastEvent::Activated { id });
        assert_eq!(serialized.timestamp_ms, 25);
    }

    #[test]
    fn events_before_start_clamp_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let serialized = SerializableEvent::new(
            Instant::now(),
            start,
            ToastEvent::Removed {
                id: ToastId::from_raw(0),
            },
        );
        assert_eq!(serialized.timestamp_ms, 0);
    }

    #[test]
    fn summary_counts_by_type() {
        let id = ToastId::from_raw(2);
        let events = vec![
            event(ToastEvent::Activated { id }),
            event(ToastEvent::Expired { id }),
            event(ToastEvent::Activated { id }),
        ];

        let summary = ReportSummary::from_events(&events);

        assert_eq!(summary.event_counts.get("activated"), Some(&2));
        assert_eq!(summary.event_counts.get("expired"), Some(&1));
        assert_eq!(summary.event_counts.get("removed"), None);
    }

    #[test]
    fn report_json_flattens_event_fields() {
        let id = ToastId::from_raw(4);
        let metadata = ReportMetadata::new(Utc::now(), 100, 1);
        let report = DiagnosticReport::new(metadata, vec![event(ToastEvent::Dismissed { id })]);

        let json = report.to_json().expect("serialization should succeed");

        assert!(json.contains("\"timestamp_ms\": 25"));
        assert!(json.contains("\"type\": \"dismissed\""));
        assert!(json.contains("\"crate_version\""));
    }
}
