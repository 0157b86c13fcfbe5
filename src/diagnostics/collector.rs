// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for toast lifecycle events.
//!
//! Toasters hold a cheap [`DiagnosticsHandle`] and push events through a
//! bounded channel; the [`DiagnosticsCollector`] drains the channel into a
//! circular buffer whenever the host asks it to.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticReport, ReportMetadata,
    SerializableEvent, ToastEvent,
};
use crate::error::Result;

/// Handle for sending lifecycle events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Sends never block: when the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records an event that happened at `at`.
    pub fn log(&self, event: ToastEvent, at: Instant) {
        let _ = self
            .event_tx
            .try_send(DiagnosticEvent::with_timestamp(event, at));
    }

    /// Records an event stamped with the current real time.
    pub fn log_now(&self, event: ToastEvent) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(event));
    }

    /// Attempts to send an event, returning an error if the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(
        &self,
        event: ToastEvent,
        at: Instant,
    ) -> std::result::Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx
            .try_send(DiagnosticEvent::with_timestamp(event, at))
    }
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Central collector for lifecycle events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for relative event timestamps.
    collection_started_at: Instant,
    /// Wall clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_channel_capacity(capacity, DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a collector with a custom channel size (mostly for tests).
    #[must_use]
    pub fn with_channel_capacity(capacity: BufferCapacity, channel_capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(channel_capacity);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    ///
    /// Call this periodically (e.g., on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport::new(metadata, events)
    }

    /// Exports all buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> Result<String> {
        Ok(self.build_report().to_json()?)
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn export_to_path(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{Kind, ToastId};
    use tempfile::tempdir;

    fn created(raw: u64) -> ToastEvent {
        ToastEvent::Created {
            id: ToastId::from_raw(raw),
            kind: Kind::Success,
        }
    }

    #[test]
    fn events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_now(created(0));
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
        assert_eq!(collector.iter().next().map(|e| e.kind.clone()), Some(created(0)));
    }

    #[test]
    fn full_channel_drops_without_blocking() {
        let collector = DiagnosticsCollector::with_channel_capacity(BufferCapacity::default(), 2);
        let handle = collector.handle();
        let now = Instant::now();

        assert!(handle.try_log(created(0), now).is_ok());
        assert!(handle.try_log(created(1), now).is_ok());
        assert!(matches!(
            handle.try_log(created(2), now),
            Err(TrySendError::Full(_))
        ));
        // The fire-and-forget variant simply drops.
        handle.log(created(3), now);
    }

    #[test]
    fn buffer_keeps_most_recent_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(100));
        let handle = collector.handle();

        for i in 0..150 {
            handle.log_now(created(i));
            collector.process_pending();
        }

        assert_eq!(collector.len(), 100);
        assert_eq!(
            collector.iter().next().map(|e| e.kind.id()),
            Some(ToastId::from_raw(50))
        );
    }

    #[test]
    fn export_json_contains_events_and_summary() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_now(created(0));
        handle.log_now(ToastEvent::Expired {
            id: ToastId::from_raw(0),
        });
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["metadata"]["event_count"], 2);
        assert_eq!(value["events"][0]["type"], "created");
        assert_eq!(value["summary"]["event_counts"]["expired"], 1);
    }

    #[test]
    fn export_to_path_writes_file() {
        let collector = DiagnosticsCollector::default();
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("reports").join("toasts.json");

        collector.export_to_path(&path).expect("export should succeed");

        let content = fs::read_to_string(&path).expect("report should exist");
        assert!(content.contains("\"events\": []"));
    }
}
