// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types captured by the diagnostics collector.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::toast::{Kind, ToastId};

/// A toast lifecycle transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToastEvent {
    /// A toast was appended in the pending phase.
    Created { id: ToastId, kind: Kind },

    /// The activation delay elapsed and the toast became visible.
    Activated { id: ToastId },

    /// The countdown was frozen.
    Paused {
        id: ToastId,
        /// Budget left at the instant of pausing.
        remaining_ms: u64,
    },

    /// The countdown was restarted from the frozen budget.
    Resumed { id: ToastId, remaining_ms: u64 },

    /// The countdown reached zero.
    Expired { id: ToastId },

    /// A caller hid the toast before it expired.
    Dismissed { id: ToastId },

    /// The grace period elapsed and the toast left the registry.
    Removed { id: ToastId },
}

impl ToastEvent {
    /// The toast this event is about.
    #[must_use]
    pub fn id(&self) -> ToastId {
        match self {
            Self::Created { id, .. }
            | Self::Activated { id }
            | Self::Paused { id, .. }
            | Self::Resumed { id, .. }
            | Self::Expired { id }
            | Self::Dismissed { id }
            | Self::Removed { id } => *id,
        }
    }

    /// Stable snake_case name, matching the serialized `type` tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Activated { .. } => "activated",
            Self::Paused { .. } => "paused",
            Self::Resumed { .. } => "resumed",
            Self::Expired { .. } => "expired",
            Self::Dismissed { .. } => "dismissed",
            Self::Removed { .. } => "removed",
        }
    }
}

/// A timestamped lifecycle event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the transition happened, on the toaster's clock.
    pub timestamp: Instant,
    pub kind: ToastEvent,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: ToastEvent) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: ToastEvent, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}
