// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording toast lifecycle events.
//!
//! Toasters optionally carry a [`DiagnosticsHandle`]; every state transition
//! (created, activated, paused, resumed, expired, dismissed, removed) is sent
//! to a [`DiagnosticsCollector`], stored in a memory-bounded
//! [`CircularBuffer`], and can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`ToastEvent`]: One lifecycle transition
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, ToastEvent};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
