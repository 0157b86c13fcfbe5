// SPDX-License-Identifier: MPL-2.0
//! Iced glue for the toast lifecycle engine.
//!
//! The engine itself lives in [`crate::toast`]; this module adapts it to the
//! Elm-style "state down, messages up" loop.
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::ui::notifications::{self, NotificationMessage};
//!
//! // In update
//! Message::Notification(message) => self.toaster.handle_message(&message),
//!
//! // In subscription
//! notifications::subscription(&self.toaster).map(Message::Notification)
//!
//! // In view, read `self.toaster.snapshot()` and draw each toast from its
//! // phase, kind, overrides and `progress()`; emit `Pause`/`Resume` on hover
//! // and `Dismiss` on click.
//! ```

mod message;
mod subscription;

pub use message::Message as NotificationMessage;
pub use subscription::{cadence, subscription};
