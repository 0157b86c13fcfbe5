// SPDX-License-Identifier: MPL-2.0
//! The public toast API.
//!
//! [`Toaster`] ties the registry, the scheduler and a clock together. Callers
//! use `show_success`/`show_error`; renderers read [`Toaster::snapshot`] and
//! forward hover/click interaction to `pause`, `resume` and `dismiss`.
//!
//! Time only moves forward inside [`Toaster::poll`] (and at the start of every
//! mutator, which catches up first). Due work is replayed in deadline order,
//! each step seeing its own deadline as "now", so a host that polls late
//! still observes exactly the transitions that on-time timers would produce.

use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use super::entity::{Kind, Overrides, Toast, ToastId};
use super::registry::{Registry, Snapshot};
use super::scheduler::{Due, Scheduler};
use crate::diagnostics::{DiagnosticsHandle, ToastEvent};
use crate::domain::timing::Timings;

/// Toast lifecycle engine.
#[derive(Debug)]
pub struct Toaster<C: Clock = SystemClock> {
    registry: Registry,
    scheduler: Scheduler,
    timings: Timings,
    clock: C,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Toaster<SystemClock> {
    /// Creates a toaster on real time with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock, Timings::default())
    }

    /// Creates a toaster on real time with custom timings.
    #[must_use]
    pub fn with_timings(timings: Timings) -> Self {
        Self::with_clock(SystemClock, timings)
    }
}

impl Default for Toaster<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Toaster<C> {
    #[must_use]
    pub fn with_clock(clock: C, timings: Timings) -> Self {
        Self {
            registry: Registry::new(timings.duration.as_duration()),
            scheduler: Scheduler::new(),
            timings,
            clock,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for recording lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Shows a success toast. Fire-and-forget.
    pub fn show_success(&mut self, message: impl Into<String>, overrides: Overrides) {
        self.show(message, Kind::Success, overrides);
    }

    /// Shows an error toast. Fire-and-forget.
    pub fn show_error(&mut self, message: impl Into<String>, overrides: Overrides) {
        self.show(message, Kind::Error, overrides);
    }

    /// Creates a pending toast and schedules its activation.
    ///
    /// Returns the id for hosts that want to track it; the `show_*`
    /// shortcuts discard it.
    pub fn show(&mut self, message: impl Into<String>, kind: Kind, overrides: Overrides) -> ToastId {
        let now = self.catch_up();
        let id = self.registry.create(message, kind, overrides);
        self.scheduler
            .schedule_activation(id, now + self.timings.activation_delay.as_duration());
        self.log(ToastEvent::Created { id, kind }, now);
        id
    }

    /// Freezes the countdown of a visible toast. No-op otherwise.
    pub fn pause(&mut self, id: ToastId) {
        let now = self.catch_up();
        if self.registry.pause(id, now) {
            self.refresh_expiry();
            let remaining_ms = self.remaining_ms(id);
            self.log(ToastEvent::Paused { id, remaining_ms }, now);
        }
    }

    /// Restarts the countdown of a paused toast from its frozen budget.
    /// No-op otherwise.
    pub fn resume(&mut self, id: ToastId) {
        let now = self.catch_up();
        if self.registry.resume(id, now) {
            self.refresh_expiry();
            let remaining_ms = self.remaining_ms(id);
            self.log(ToastEvent::Resumed { id, remaining_ms }, now);
        }
    }

    /// Hides a toast and schedules its removal after the grace period.
    ///
    /// Idempotent: unknown and already hidden ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) {
        let now = self.catch_up();
        if self.registry.dismiss(id) {
            self.refresh_expiry();
            self.scheduler
                .schedule_removal(id, now + self.timings.removal_grace.as_duration());
            self.log(ToastEvent::Dismissed { id }, now);
        }
    }

    /// Runs every piece of lifecycle work that is due.
    ///
    /// Returns `true` if anything ran, so hosts can skip redundant repaints.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        self.run_due(now)
    }

    /// Earliest instant at which [`Toaster::poll`] has work to do.
    ///
    /// `None` means idle: nothing pending, visible or awaiting removal.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Time until [`Toaster::next_deadline`], saturating at zero.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|at| at.saturating_duration_since(self.clock.now()))
    }

    /// Whether the scheduler still has deadlines (activation, tick or removal).
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Whether a toast is still waiting for its activation delay.
    #[must_use]
    pub fn has_pending_activation(&self) -> bool {
        self.scheduler.has_pending_activation()
    }

    /// Point-in-time, insertion-ordered view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.registry.snapshot()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.registry.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Drops every toast and deadline immediately, without exit transitions.
    pub fn clear(&mut self) {
        let now = self.clock.now();
        let ids: Vec<ToastId> = self.registry.iter().map(Toast::id).collect();
        self.registry.clear();
        self.scheduler.clear();
        for id in ids {
            self.log(ToastEvent::Removed { id }, now);
        }
    }

    fn catch_up(&mut self) -> Instant {
        let now = self.clock.now();
        self.run_due(now);
        now
    }

    fn run_due(&mut self, now: Instant) -> bool {
        let mut ran = false;
        while let Some((at, due)) = self.scheduler.take_due(now) {
            self.run(at, due);
            self.refresh_expiry();
            ran = true;
        }
        ran
    }

    fn run(&mut self, at: Instant, due: Due) {
        let tick = self.timings.tick_interval.as_duration();
        match due {
            Due::Activate(id) => {
                if self.registry.activate(id, at) {
                    self.scheduler.arm_tick(at + tick);
                    self.log(ToastEvent::Activated { id }, at);
                }
            }
            Due::Tick => {
                self.expire(at);
                if self.registry.has_visible() {
                    self.scheduler.arm_tick(at + tick);
                }
            }
            Due::Expire => self.expire(at),
            Due::Remove(id) => {
                if self.registry.remove(id) {
                    self.log(ToastEvent::Removed { id }, at);
                }
            }
        }
    }

    /// Ages every running toast at `at` and schedules removal of the ones
    /// that ran out.
    fn expire(&mut self, at: Instant) {
        let grace = self.timings.removal_grace.as_duration();
        for id in self.registry.age(at) {
            self.scheduler.schedule_removal(id, at + grace);
            self.log(ToastEvent::Expired { id }, at);
        }
    }

    fn refresh_expiry(&mut self) {
        self.scheduler.set_expiry(self.registry.next_expiry());
    }

    #[allow(clippy::cast_possible_truncation)] // Toast budgets are far below u64::MAX ms
    fn remaining_ms(&self, id: ToastId) -> u64 {
        self.registry
            .get(id)
            .map_or(0, |toast| toast.remaining().as_millis() as u64)
    }

    fn log(&self, event: ToastEvent, at: Instant) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event, at);
        }
    }
}
