// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a lifecycle engine for transient "toast" notifications.
//!
//! It manages each toast's activation, countdown, pause-on-hover and removal,
//! and leaves all drawing to the host. Hosts drive it either from an Iced
//! subscription ([`ui::notifications`]) or from a tokio task ([`service`]).

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod service;
pub mod toast;
pub mod ui;
