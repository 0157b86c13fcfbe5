// SPDX-License-Identifier: MPL-2.0
//! Tick subscription for toast timers.
//!
//! The subscription only exists while the toaster has deadlines, so an idle
//! application schedules no background work for toasts.

use std::time::Duration;

use iced::{time, Subscription};

use super::message::Message;
use crate::toast::{Clock, Toaster};

/// Lower bound for the tick period when activation delays are very short.
const MIN_CADENCE: Duration = Duration::from_millis(1);

/// Creates the periodic tick subscription for a toaster.
pub fn subscription<C: Clock>(toaster: &Toaster<C>) -> Subscription<Message> {
    match cadence(toaster) {
        Some(period) => time::every(period).map(Message::Tick),
        None => Subscription::none(),
    }
}

/// How often the host should tick the toaster, or `None` when idle.
///
/// While a toast awaits activation the period shrinks to the activation
/// delay so the entry transition starts on time.
#[must_use]
pub fn cadence<C: Clock>(toaster: &Toaster<C>) -> Option<Duration> {
    if !toaster.has_pending_work() {
        return None;
    }
    let timings = toaster.timings();
    let tick = timings.tick_interval.as_duration();
    if toaster.has_pending_activation() {
        let activation = timings.activation_delay.as_duration().max(MIN_CADENCE);
        Some(tick.min(activation))
    } else {
        Some(tick)
    }
}
