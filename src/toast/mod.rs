// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle engine.
//!
//! A toast is created `Pending`, becomes `Visible` after a short activation
//! delay, counts down while visible and unpaused, turns `Hidden` when it
//! expires or is dismissed, and is removed after a grace period.
//!
//! # Components
//!
//! - [`clock`] - `Clock` trait with system, tokio and manual implementations
//! - [`entity`] - `Toast` record, `ToastId`, `Kind`, `Phase`, `Overrides`
//! - [`registry`] - ordered collection with idempotent mutators and snapshots
//! - [`scheduler`] - activation, shared tick and removal deadlines
//! - [`toaster`] - the public `Toaster` API
//!
//! # Usage
//!
//! ```
//! use iced_toast::domain::timing::Timings;
//! use iced_toast::toast::{ManualClock, Overrides, Phase, Toaster};
//!
//! let clock = ManualClock::new();
//! let mut toaster = Toaster::with_clock(clock.clone(), Timings::default());
//!
//! toaster.show_success("Saved", Overrides::default());
//! clock.advance_ms(10);
//! toaster.poll();
//!
//! let snapshot = toaster.snapshot();
//! assert_eq!(snapshot.iter().next().map(|t| t.phase()), Some(Phase::Visible));
//! ```

pub mod clock;
pub mod entity;
pub mod registry;
pub mod scheduler;
mod toaster;

pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use entity::{Kind, Overrides, Phase, Toast, ToastId};
pub use registry::{Registry, Snapshot};
pub use scheduler::{Due, Scheduler};
pub use toaster::Toaster;
