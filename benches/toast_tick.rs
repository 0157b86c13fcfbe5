// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast timeline.
//!
//! Measures the performance of:
//! - Showing a burst of toasts
//! - Catching up a busy toaster after a long gap
//! - Taking renderer snapshots

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toast::domain::timing::Timings;
use iced_toast::toast::{Kind, ManualClock, Overrides, Toaster};
use std::hint::black_box;

const BURST_SIZES: [usize; 3] = [1, 16, 128];

fn busy_toaster(count: usize) -> (Toaster<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut toaster = Toaster::with_clock(clock.clone(), Timings::default());
    for index in 0..count {
        let kind = if index % 2 == 0 {
            Kind::Success
        } else {
            Kind::Error
        };
        toaster.show(format!("toast {index}"), kind, Overrides::default());
    }
    (toaster, clock)
}

fn bench_show(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_tick");

    for size in BURST_SIZES {
        group.bench_with_input(BenchmarkId::new("show_burst", size), &size, |b, &size| {
            b.iter(|| black_box(busy_toaster(size)));
        });
    }

    group.finish();
}

/// Replays a whole lifecycle (activation, every tick, expiry and removal)
/// in one poll.
fn bench_catch_up(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_tick");

    for size in BURST_SIZES {
        group.bench_with_input(BenchmarkId::new("full_catch_up", size), &size, |b, &size| {
            b.iter_batched(
                || busy_toaster(size),
                |(mut toaster, clock)| {
                    clock.advance_ms(4000);
                    black_box(toaster.poll());
                    toaster
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_tick");

    let (mut toaster, clock) = busy_toaster(128);
    clock.advance_ms(500);
    toaster.poll();

    group.bench_function("snapshot_128", |b| {
        b.iter(|| black_box(toaster.snapshot()));
    });

    group.finish();
}

criterion_group!(benches, bench_show, bench_catch_up, bench_snapshot);
criterion_main!(benches);
