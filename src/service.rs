// SPDX-License-Identifier: MPL-2.0
//! Async toast service for tokio hosts.
//!
//! One task owns a [`Toaster`] and serializes everything on a single
//! timeline: caller commands arrive on an unbounded channel, timer work runs
//! when the toaster's next deadline passes, and every resulting state is
//! published on a `watch` channel for renderers. When no toast is pending,
//! visible or awaiting removal the task sleeps on the command channel only.
//!
//! # Example
//!
//! ```no_run
//! use iced_toast::domain::timing::Timings;
//! use iced_toast::service::ToastService;
//! use iced_toast::toast::Overrides;
//!
//! # async fn demo() {
//! let (handle, _task) = ToastService::new(Timings::default()).spawn();
//! handle.show_success("Saved", Overrides::default());
//!
//! let mut updates = handle.subscribe();
//! while updates.changed().await.is_ok() {
//!     let snapshot = updates.borrow_and_update().clone();
//!     if snapshot.is_empty() {
//!         break;
//!     }
//! }
//! # }
//! ```

use std::time::Instant;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time;

use crate::diagnostics::DiagnosticsHandle;
use crate::domain::timing::Timings;
use crate::toast::{Kind, Overrides, Snapshot, ToastId, Toaster, TokioClock};

enum Command {
    Show {
        message: String,
        kind: Kind,
        overrides: Overrides,
    },
    Pause(ToastId),
    Resume(ToastId),
    Dismiss(ToastId),
    Clear,
}

/// Builder for the background toast task.
#[derive(Debug, Default)]
pub struct ToastService {
    timings: Timings,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ToastService {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            diagnostics: None,
        }
    }

    /// Records lifecycle events through `handle`.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Spawns the driver task on the current tokio runtime.
    ///
    /// The task ends once every [`ToastHandle`] has been dropped.
    #[must_use]
    pub fn spawn(self) -> (ToastHandle, JoinHandle<()>) {
        let mut toaster = Toaster::with_clock(TokioClock, self.timings);
        if let Some(handle) = self.diagnostics {
            toaster.set_diagnostics(handle);
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(Snapshot::default());
        let task = tokio::spawn(drive(toaster, command_rx, snapshot_tx));

        (
            ToastHandle {
                commands: command_tx,
                snapshots: snapshot_rx,
            },
            task,
        )
    }
}

/// Cloneable caller surface of a running [`ToastService`].
///
/// All mutators are fire-and-forget: they never block and never fail; once
/// the service has stopped they are silently ignored.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
}

impl ToastHandle {
    pub fn show_success(&self, message: impl Into<String>, overrides: Overrides) {
        self.show(message, Kind::Success, overrides);
    }

    pub fn show_error(&self, message: impl Into<String>, overrides: Overrides) {
        self.show(message, Kind::Error, overrides);
    }

    pub fn show(&self, message: impl Into<String>, kind: Kind, overrides: Overrides) {
        self.send(Command::Show {
            message: message.into(),
            kind,
            overrides,
        });
    }

    pub fn pause(&self, id: ToastId) {
        self.send(Command::Pause(id));
    }

    pub fn resume(&self, id: ToastId) {
        self.send(Command::Resume(id));
    }

    pub fn dismiss(&self, id: ToastId) {
        self.send(Command::Dismiss(id));
    }

    /// Drops every toast immediately.
    pub fn clear(&self) {
        self.send(Command::Clear);
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified whenever the published state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Whether the driver task is still accepting commands.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.commands.is_closed()
    }

    fn send(&self, command: Command) {
        let _ = self.commands.send(command);
    }
}

async fn drive(
    mut toaster: Toaster<TokioClock>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<Snapshot>,
) {
    loop {
        let deadline = toaster.next_deadline();
        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => apply(&mut toaster, command),
                None => break,
            },
            () = wait_until(deadline) => {
                toaster.poll();
            }
        }
        publish(&toaster, &snapshots);
    }
}

fn apply(toaster: &mut Toaster<TokioClock>, command: Command) {
    match command {
        Command::Show {
            message,
            kind,
            overrides,
        } => {
            toaster.show(message, kind, overrides);
        }
        Command::Pause(id) => toaster.pause(id),
        Command::Resume(id) => toaster.resume(id),
        Command::Dismiss(id) => toaster.dismiss(id),
        Command::Clear => toaster.clear(),
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(time::Instant::from_std(at)).await,
        None => std::future::pending().await,
    }
}

fn publish(toaster: &Toaster<TokioClock>, snapshots: &watch::Sender<Snapshot>) {
    let next = toaster.snapshot();
    snapshots.send_if_modified(|current| {
        if *current == next {
            return false;
        }
        *current = next;
        true
    });
}
