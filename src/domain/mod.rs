// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`timing`]: Lifecycle timing types ([`DisplayDuration`](timing::DisplayDuration),
//!   [`ActivationDelay`](timing::ActivationDelay), [`TickInterval`](timing::TickInterval),
//!   [`RemovalGrace`](timing::RemovalGrace), [`Timings`](timing::Timings))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod diagnostics;
pub mod timing;
