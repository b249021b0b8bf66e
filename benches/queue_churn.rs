// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast queue operations.
//!
//! Measures:
//! - Filling a queue and draining it through the visible slot
//! - Cancelling waiting toasts from the middle of a full queue
//! - Applying requests posted through a queue handle

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toast::queue::{QueueCapacity, ToastQueue};
use std::hint::black_box;

/// Fill to capacity, then dismiss the visible toast until idle.
fn bench_fill_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_churn");

    for capacity in [10usize, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("fill_and_drain", capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut queue = ToastQueue::new(QueueCapacity::new(capacity));
                    for id in 0..=capacity as u64 {
                        queue.enqueue(id);
                    }
                    while let Some(&current) = queue.current() {
                        queue.dequeue(&current);
                    }
                    black_box(&queue);
                });
            },
        );
    }

    group.finish();
}

/// Cancel every other waiting toast from a full queue.
fn bench_cancel_pending(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_churn");
    let capacity = 100usize;

    group.bench_function("cancel_pending", |b| {
        b.iter(|| {
            let mut queue = ToastQueue::new(QueueCapacity::new(capacity));
            for id in 0..=capacity as u64 {
                queue.enqueue(id);
            }
            for id in (1..=capacity as u64).step_by(2) {
                queue.dequeue(&id);
            }
            black_box(queue.pending_len());
        });
    });

    group.finish();
}

/// Post requests through a handle and apply them in one drain.
fn bench_handle_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_churn");

    group.bench_function("handle_drain", |b| {
        b.iter(|| {
            let mut queue = ToastQueue::new(QueueCapacity::default());
            let handle = queue.handle();
            for id in 0..50u64 {
                handle.enqueue(id);
                handle.dequeue(id);
            }
            black_box(queue.process_pending());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fill_and_drain,
    bench_cancel_pending,
    bench_handle_drain
);
criterion_main!(benches);
