//! Benchmarks for the memoizing component wrapper.
//!
//! Run with: cargo bench -p zentui-reactive

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zentui_reactive::{Component, Memoized, component};

fn make_row_props(cols: usize) -> Vec<String> {
    (0..cols).map(|c| format!("cell {c}")).collect()
}

// ============================================================================
// View path: cache hit vs miss vs unwrapped baseline
// ============================================================================

fn bench_memo_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo/view");

    for cols in [4usize, 16, 64] {
        let inner = component(|props: &Vec<String>| props.join(" | "));
        let memo = Memoized::new(component(|props: &Vec<String>| props.join(" | ")));
        let props = make_row_props(cols);
        let other = make_row_props(cols + 1);

        group.bench_with_input(BenchmarkId::new("hit", cols), &(), |b, _| {
            let _ = memo.view(&props);
            b.iter(|| black_box(memo.view(&props)))
        });

        group.bench_with_input(BenchmarkId::new("miss", cols), &(), |b, _| {
            b.iter(|| {
                black_box(memo.view(&props));
                black_box(memo.view(&other));
            })
        });

        group.bench_with_input(BenchmarkId::new("unwrapped", cols), &(), |b, _| {
            b.iter(|| black_box(inner.view(&props)))
        });
    }

    group.finish();
}

// ============================================================================
// Comparison cost for reference-equality props
// ============================================================================

fn bench_shared_props(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo/shared_props");

    for len in [16usize, 1024, 65_536] {
        let memo = Memoized::new(component(|items: &zentui_core::Shared<Vec<u64>>| {
            items.len()
        }));
        let items = zentui_core::Shared::new(vec![0u64; len]);

        // Hits compare by pointer, so the payload length must not matter.
        group.bench_with_input(BenchmarkId::new("hit", len), &(), |b, _| {
            let _ = memo.view(&items);
            b.iter(|| black_box(memo.view(&items)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_memo_view, bench_shared_props);
criterion_main!(benches);
