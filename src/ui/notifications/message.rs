// SPDX-License-Identifier: MPL-2.0
//! Messages an Iced application routes to its toaster.

use std::time::Instant;

use crate::toast::{Clock, ToastId, Toaster};

/// Toast interaction and timer messages.
///
/// Renderers emit `Pause`/`Resume` on pointer enter/leave and `Dismiss` on
/// click; the subscription emits `Tick`.
#[derive(Debug, Clone)]
pub enum Message {
    Pause(ToastId),
    Resume(ToastId),
    Dismiss(ToastId),
    /// Periodic tick driving activation, aging and removal.
    Tick(Instant),
}

impl<C: Clock> Toaster<C> {
    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Pause(id) => self.pause(*id),
            Message::Resume(id) => self.resume(*id),
            Message::Dismiss(id) => self.dismiss(*id),
            Message::Tick(_instant) => {
                self.poll();
            }
        }
    }
}
