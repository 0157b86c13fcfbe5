// SPDX-License-Identifier: MPL-2.0
//! Headless demo: shows toasts through the async service and prints every
//! state change until the registry drains.
//!
//! ```text
//! iced_toast_demo [--success <MSG>] [--error <MSG>] [--config <PATH>]
//!                 [--diagnostics <PATH>]
//! ```

use iced_toast::config;
use iced_toast::diagnostics::DiagnosticsCollector;
use iced_toast::service::ToastService;
use iced_toast::toast::{Overrides, Snapshot};
use std::path::PathBuf;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let success: Option<String> = args.opt_value_from_str("--success")?;
    let error: Option<String> = args.opt_value_from_str("--error")?;
    let diagnostics_path: Option<PathBuf> = args.opt_value_from_str("--diagnostics")?;

    let config = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };

    let mut collector = diagnostics_path
        .as_ref()
        .map(|_| DiagnosticsCollector::new(config.buffer_capacity()));
    let mut service = ToastService::new(config.timings());
    if let Some(collector) = &collector {
        service = service.with_diagnostics(collector.handle());
    }
    let (handle, task) = service.spawn();
    let mut updates = handle.subscribe();

    if success.is_none() && error.is_none() {
        handle.show_success("Success toast!", Overrides::default());
        handle.show_error("Error toast!", Overrides::default());
    }
    if let Some(message) = success {
        handle.show_success(message, Overrides::default());
    }
    if let Some(message) = error {
        handle.show_error(message, Overrides::default());
    }

    while updates.changed().await.is_ok() {
        let snapshot = updates.borrow_and_update().clone();
        print_snapshot(&snapshot);
        if snapshot.is_empty() {
            break;
        }
    }

    drop(updates);
    drop(handle);
    task.await?;

    if let (Some(collector), Some(path)) = (collector.as_mut(), diagnostics_path) {
        collector.process_pending();
        collector.export_to_path(&path)?;
        println!("Diagnostics written to {}", path.display());
    }
    Ok(())
}

fn print_snapshot(snapshot: &Snapshot) {
    if snapshot.is_empty() {
        println!("(no toasts)");
        return;
    }
    let line: Vec<String> = snapshot
        .iter()
        .map(|toast| {
            format!(
                "[{:?} {:?} {:>3.0}%{}] {}",
                toast.kind(),
                toast.phase(),
                toast.progress() * 100.0,
                if toast.is_paused() { " paused" } else { "" },
                toast.message()
            )
        })
        .collect();
    println!("{}", line.join("  "));
}
