//! Notification overhead of `ObservableList` compared with a bare `Vec`.
//!
//! Run with: cargo bench --bench list_bench

use std::cell::Cell;
use std::rc::Rc;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use observable_list::{ItemEvent, ObservableList};

const SIZES: [usize; 2] = [1_000, 10_000];
const LISTENER_COUNTS: [usize; 3] = [0, 1, 4];

/// A list with `listeners` counting subscribers on every channel.
fn list_with_listeners(listeners: usize) -> (ObservableList<u64>, Rc<Cell<u64>>) {
    let list = ObservableList::new();
    let hits = Rc::new(Cell::new(0u64));
    for _ in 0..listeners {
        let h = Rc::clone(&hits);
        list.item_added().subscribe(move |e: &ItemEvent<u64>| h.set(h.get().wrapping_add(e.item)));
        let h = Rc::clone(&hits);
        list.item_removed().subscribe(move |e: &ItemEvent<u64>| h.set(h.get().wrapping_sub(e.item)));
        let h = Rc::clone(&hits);
        list.clearing().subscribe(move |_| h.set(h.get().wrapping_add(1)));
        let h = Rc::clone(&hits);
        list.cleared().subscribe(move |_| h.set(h.get().wrapping_add(1)));
    }
    (list, hits)
}

// =============================================================================
// Append
// =============================================================================

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size as u64 {
                    vec.push(i);
                }
                black_box(vec.len())
            });
        });

        for listeners in LISTENER_COUNTS {
            let name = format!("ObservableList/{}", listeners);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &size| {
                b.iter(|| {
                    let (list, hits) = list_with_listeners(listeners);
                    for i in 0..size as u64 {
                        list.add(i);
                    }
                    black_box((list.len(), hits.get()))
                });
            });
        }
    }

    group.finish();
}

// =============================================================================
// Replace
// =============================================================================

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        for listeners in LISTENER_COUNTS {
            let (list, hits) = list_with_listeners(listeners);
            list.extend(0..size as u64);

            let name = format!("ObservableList/{}", listeners);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &size| {
                b.iter(|| {
                    for i in 0..size {
                        let _ = black_box(list.set(i, i as u64 * 2));
                    }
                    black_box(hits.get())
                });
            });
        }
    }

    group.finish();
}

// =============================================================================
// Clear
// =============================================================================

fn bench_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear");

    for size in SIZES {
        for listeners in LISTENER_COUNTS {
            let name = format!("ObservableList/{}", listeners);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &size| {
                let (list, hits) = list_with_listeners(listeners);
                b.iter(|| {
                    for i in 0..size as u64 {
                        list.add(i);
                    }
                    list.clear();
                    black_box(hits.get())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_set, bench_clear);
criterion_main!(benches);
