// SPDX-License-Identifier: MPL-2.0
//! Deadline bookkeeping for the toast lifecycle.
//!
//! Instead of one timer object per toast, the scheduler keeps a few kinds of
//! deadlines:
//!
//! - one-shot activations (`Pending -> Visible`),
//! - a single shared aging tick, armed only while something is visible,
//! - the earliest expiry among running toasts, so a toast hides exactly when
//!   its budget runs out even between ticks,
//! - one-shot removals for hidden toasts.
//!
//! The scheduler never touches toast state. The toaster pulls due work with
//! [`Scheduler::take_due`] and applies it to the registry.

use super::entity::ToastId;
use std::collections::VecDeque;
use std::time::Instant;

/// A piece of lifecycle work whose deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    Activate(ToastId),
    Tick,
    Expire,
    Remove(ToastId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Deadline {
    at: Instant,
    id: ToastId,
}

/// Pending activations, removals and the shared tick.
#[derive(Debug, Default)]
pub struct Scheduler {
    activations: VecDeque<Deadline>,
    removals: VecDeque<Deadline>,
    next_tick: Option<Instant>,
    next_expiry: Option<Instant>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_activation(&mut self, id: ToastId, at: Instant) {
        insert_sorted(&mut self.activations, Deadline { at, id });
    }

    pub fn schedule_removal(&mut self, id: ToastId, at: Instant) {
        insert_sorted(&mut self.removals, Deadline { at, id });
    }

    /// Arms the shared tick unless it is already armed.
    pub fn arm_tick(&mut self, at: Instant) {
        if self.next_tick.is_none() {
            self.next_tick = Some(at);
        }
    }

    /// Replaces the expiry deadline. The toaster recomputes it after every
    /// transition, so a stale value never outlives the next step.
    pub fn set_expiry(&mut self, at: Option<Instant>) {
        self.next_expiry = at;
    }

    #[must_use]
    pub fn is_tick_armed(&self) -> bool {
        self.next_tick.is_some()
    }

    #[must_use]
    pub fn has_pending_activation(&self) -> bool {
        !self.activations.is_empty()
    }

    /// Earliest deadline of any kind, or `None` when there is nothing to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.peek().map(|(at, _)| at)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.next_deadline().is_none()
    }

    /// Pops the earliest piece of work due at or before `now`.
    ///
    /// Ties resolve activation first, then tick, then expiry, then removal,
    /// so a toast activated at the tick instant is aged in that same tick. Taking the
    /// tick disarms it; the caller re-arms it if toasts are still visible.
    pub fn take_due(&mut self, now: Instant) -> Option<(Instant, Due)> {
        let (at, due) = self.peek()?;
        if at > now {
            return None;
        }
        match due {
            Due::Activate(_) => {
                self.activations.pop_front();
            }
            Due::Tick => self.next_tick = None,
            Due::Expire => self.next_expiry = None,
            Due::Remove(_) => {
                self.removals.pop_front();
            }
        }
        Some((at, due))
    }

    /// Drops every deadline.
    pub fn clear(&mut self) {
        self.activations.clear();
        self.removals.clear();
        self.next_tick = None;
        self.next_expiry = None;
    }

    fn peek(&self) -> Option<(Instant, Due)> {
        let activation = self
            .activations
            .front()
            .map(|d| (d.at, Due::Activate(d.id)));
        let tick = self.next_tick.map(|at| (at, Due::Tick));
        let expiry = self.next_expiry.map(|at| (at, Due::Expire));
        let removal = self.removals.front().map(|d| (d.at, Due::Remove(d.id)));

        // `min_by_key` keeps the first of equal keys, which gives the tie order.
        [activation, tick, expiry, removal]
            .into_iter()
            .flatten()
            .min_by_key(|(at, _)| *at)
    }
}

/// Keeps deadlines ordered; equal instants stay in insertion order.
fn insert_sorted(queue: &mut VecDeque<Deadline>, deadline: Deadline) {
    let index = queue.partition_point(|d| d.at <= deadline.at);
    queue.insert(index, deadline);
}
