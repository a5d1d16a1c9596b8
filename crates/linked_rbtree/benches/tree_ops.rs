// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![expect(missing_docs, reason = "Benchmark code")]

use std::alloc::System;
use std::hint::black_box;

use alloc_tracker::{Allocator, Session};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use linked_rbtree::RbTree;
use testing_aids::shuffled_indices;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<System> = Allocator::system();

const NODE_COUNT: usize = 10_000;

fn entrypoint(c: &mut Criterion) {
    let allocs = Session::new();

    let mut group = c.benchmark_group("RbTree");

    let allocs_op = allocs.operation("insert_after_10k");
    group.bench_function("insert_after_10k", |b| {
        b.iter(|| {
            let _span = allocs_op.measure_thread();
            let mut tree = RbTree::with_capacity(NODE_COUNT);
            let mut node = tree.insert_as_first(0).unwrap();
            for value in 1..NODE_COUNT {
                node = tree.insert_after(node, value).unwrap();
            }
            black_box(tree)
        });
    });

    let allocs_op = allocs.operation("from_values_10k");
    group.bench_function("from_values_10k", |b| {
        b.iter(|| {
            let _span = allocs_op.measure_thread();
            black_box(RbTree::from_values(0..NODE_COUNT).unwrap())
        });
    });

    let removal_order = shuffled_indices(NODE_COUNT, 0);

    let allocs_op = allocs.operation("remove_shuffled_10k");
    group.bench_function("remove_shuffled_10k", |b| {
        b.iter_batched(
            || {
                let tree = RbTree::from_values(0..NODE_COUNT).unwrap();
                let handles = tree.handles().collect::<Vec<_>>();
                (tree, handles)
            },
            |(mut tree, handles)| {
                let _span = allocs_op.measure_thread();
                for &index in &removal_order {
                    black_box(tree.remove(handles[index]));
                }
            },
            BatchSize::LargeInput,
        );
    });

    let allocs_op = allocs.operation("batch_remove_half_10k");
    group.bench_function("batch_remove_half_10k", |b| {
        b.iter_batched(
            || RbTree::from_values(0..NODE_COUNT).unwrap(),
            |mut tree| {
                let _span = allocs_op.measure_thread();
                let mut editor = tree.batch_editor();
                while let Some(value) = editor.value() {
                    if value % 2 == 0 {
                        black_box(editor.remove());
                    } else {
                        editor.advance();
                    }
                }
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();

    allocs.print_to_stdout();
}
