// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Flat re-exports of the bounds owned by the domain newtypes, so the
//! config layer and its callers can name them without reaching into
//! [`crate::domain`]. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display**: How long a toast counts down before expiring
//! - **Activation**: Delay between creation and visibility (entry animation)
//! - **Tick**: Period of the shared aging tick
//! - **Removal**: Grace period a hidden toast stays around (exit animation)
//! - **Diagnostics**: Event buffer sizing

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::timing::{activation_bounds, duration_bounds, grace_bounds, tick_bounds};

// ==========================================================================
// Display Duration Defaults
// ==========================================================================

/// Default display duration of a toast (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = duration_bounds::DEFAULT_MS;

/// Minimum display duration (in milliseconds).
pub const MIN_DURATION_MS: u64 = duration_bounds::MIN_MS;

/// Maximum display duration (in milliseconds).
pub const MAX_DURATION_MS: u64 = duration_bounds::MAX_MS;

// ==========================================================================
// Activation Defaults
// ==========================================================================

/// Default delay before a pending toast becomes visible (in milliseconds).
pub const DEFAULT_ACTIVATION_DELAY_MS: u64 = activation_bounds::DEFAULT_MS;

/// Minimum activation delay (in milliseconds).
pub const MIN_ACTIVATION_DELAY_MS: u64 = activation_bounds::MIN_MS;

/// Maximum activation delay (in milliseconds).
pub const MAX_ACTIVATION_DELAY_MS: u64 = activation_bounds::MAX_MS;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default period of the aging tick (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = tick_bounds::DEFAULT_MS;

/// Minimum tick period (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = tick_bounds::MIN_MS;

/// Maximum tick period (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = tick_bounds::MAX_MS;

// ==========================================================================
// Removal Defaults
// ==========================================================================

/// Default grace period between hiding and removal (in milliseconds).
pub const DEFAULT_REMOVAL_GRACE_MS: u64 = grace_bounds::DEFAULT_MS;

/// Minimum removal grace (in milliseconds).
pub const MIN_REMOVAL_GRACE_MS: u64 = grace_bounds::MIN_MS;

/// Maximum removal grace (in milliseconds).
pub const MAX_REMOVAL_GRACE_MS: u64 = grace_bounds::MAX_MS;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept by the diagnostics collector.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;
