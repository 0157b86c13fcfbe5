// SPDX-License-Identifier: MPL-2.0
//! Lifecycle timing newtypes.
//!
//! Each type wraps a millisecond count that is clamped into its valid range
//! on construction, so the scheduler never has to re-validate durations.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Display duration bounds (0.5 s to 60 s).
pub mod duration_bounds {
    pub const MIN_MS: u64 = 500;
    pub const MAX_MS: u64 = 60_000;
    pub const DEFAULT_MS: u64 = 3000;
}

/// Activation delay bounds (0 ms to 1 s).
pub mod activation_bounds {
    pub const MIN_MS: u64 = 0;
    pub const MAX_MS: u64 = 1000;
    pub const DEFAULT_MS: u64 = 10;
}

/// Tick interval bounds (10 ms to 1 s).
pub mod tick_bounds {
    pub const MIN_MS: u64 = 10;
    pub const MAX_MS: u64 = 1000;
    pub const DEFAULT_MS: u64 = 50;
}

/// Removal grace bounds (0 ms to 5 s).
pub mod grace_bounds {
    pub const MIN_MS: u64 = 0;
    pub const MAX_MS: u64 = 5000;
    pub const DEFAULT_MS: u64 = 300;
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a visible toast counts down before it expires.
///
/// # Example
///
/// ```
/// use iced_toast::domain::timing::DisplayDuration;
///
/// let duration = DisplayDuration::new(4000);
/// assert_eq!(duration.value(), 4000);
///
/// // Values outside range are clamped
/// let too_short = DisplayDuration::new(1);
/// assert_eq!(too_short.value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDuration(u64);

impl DisplayDuration {
    /// Creates a new display duration, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(duration_bounds::MIN_MS, duration_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= duration_bounds::MIN_MS
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= duration_bounds::MAX_MS
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// ActivationDelay
// =============================================================================

/// Time a freshly created toast stays pending so the renderer can paint its
/// pre-visible state before the entry transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationDelay(u64);

impl ActivationDelay {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(activation_bounds::MIN_MS, activation_bounds::MAX_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ActivationDelay {
    fn default() -> Self {
        Self(activation_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Period of the shared aging tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(tick_bounds::MIN_MS, tick_bounds::MAX_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= tick_bounds::MIN_MS
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= tick_bounds::MAX_MS
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// RemovalGrace
// =============================================================================

/// Time a hidden toast is kept for its exit transition before removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalGrace(u64);

impl RemovalGrace {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(grace_bounds::MIN_MS, grace_bounds::MAX_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RemovalGrace {
    fn default() -> Self {
        Self(grace_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Timings
// =============================================================================

/// The full set of lifecycle timings used by one toaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timings {
    pub duration: DisplayDuration,
    pub activation_delay: ActivationDelay,
    pub tick_interval: TickInterval,
    pub removal_grace: RemovalGrace,
}

// =============================================================================
// Tests
// =============================================================================
