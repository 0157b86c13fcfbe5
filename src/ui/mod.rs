// SPDX-License-Identifier: MPL-2.0
//! User interface integration.
//!
//! - [`notifications`] - Iced messages and tick subscription for the toaster

pub mod notifications;
