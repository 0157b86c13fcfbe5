// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the [`Toast`] record together with its identity,
//! kind and lifecycle [`Phase`]. Phase transitions live here as small,
//! guarded mutators; the registry and scheduler decide *when* to call them.

use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a toast within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// What a toast reports; selects the renderer's default presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    #[default]
    Success,
    Error,
}

/// Lifecycle stage of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Created, waiting for the activation delay (entry animation start state).
    Pending,
    /// On screen and counting down unless paused.
    Visible,
    /// Expired or dismissed; removed once the grace period elapses.
    Hidden,
}

/// Caller-supplied color overrides.
///
/// Unset fields leave the renderer's default for the toast's [`Kind`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overrides {
    pub background: Option<Color>,
    pub text: Option<Color>,
}

impl Overrides {
    /// Overrides the background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Overrides the text color.
    #[must_use]
    pub fn text(mut self, color: Color) -> Self {
        self.text = Some(color);
        self
    }
}

/// One notification and its timing state.
///
/// While running, `remaining == duration - (now - started_at)`. While paused,
/// `remaining` is authoritative and `started_at` is stale until resume
/// rebuilds it from `remaining`.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    message: String,
    kind: Kind,
    overrides: Overrides,
    phase: Phase,
    started_at: Option<Instant>,
    remaining: Duration,
    duration: Duration,
    paused: bool,
}

impl Toast {
    pub(crate) fn new(
        id: ToastId,
        message: String,
        kind: Kind,
        overrides: Overrides,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            message,
            kind,
            overrides,
            phase: Phase::Pending,
            started_at: None,
            remaining: duration,
            duration,
            paused: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn overrides(&self) -> Overrides {
        self.overrides
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Countdown origin, set when the toast became visible.
    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Time left before auto-expiry, as of the last tick or pause.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Full countdown this toast was created with.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Visible
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.phase == Phase::Hidden
    }

    /// Fraction of the countdown left, from 1.0 (fresh) to 0.0 (expired).
    ///
    /// Renderers map this onto a progress bar width.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.remaining.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Instant at which a running toast's budget runs out. `None` while
    /// pending, paused or hidden.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        if self.phase != Phase::Visible || self.paused {
            return None;
        }
        self.started_at.map(|started_at| started_at + self.duration)
    }

    /// `Pending -> Visible`. Toasts dismissed while pending stay hidden.
    pub(crate) fn activate(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Pending {
            return false;
        }
        self.phase = Phase::Visible;
        self.started_at = Some(now);
        true
    }

    /// Recomputes `remaining`; returns `true` when this call expired the toast.
    pub(crate) fn age(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Visible || self.paused {
            return false;
        }
        let Some(started_at) = self.started_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started_at);
        self.remaining = self.duration.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.phase = Phase::Hidden;
            return true;
        }
        false
    }

    /// Freezes the remaining budget at `now`.
    pub(crate) fn pause(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Visible || self.paused {
            return false;
        }
        if let Some(started_at) = self.started_at {
            let elapsed = now.saturating_duration_since(started_at);
            self.remaining = self.duration.saturating_sub(elapsed);
        }
        self.paused = true;
        true
    }

    /// Rebuilds `started_at` so that the next tick reproduces the frozen
    /// `remaining` exactly.
    pub(crate) fn resume(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Visible || !self.paused {
            return false;
        }
        let consumed = self.duration.saturating_sub(self.remaining);
        // Only fails within `duration` of the platform's monotonic epoch.
        self.started_at = Some(now.checked_sub(consumed).unwrap_or(now));
        self.paused = false;
        true
    }

    /// Any non-hidden phase `-> Hidden`.
    pub(crate) fn hide(&mut self) -> bool {
        if self.phase == Phase::Hidden {
            return false;
        }
        self.phase = Phase::Hidden;
        true
    }
}
