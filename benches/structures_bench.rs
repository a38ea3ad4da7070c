//! Benchmark for the data structures and the undo/redo history.
//!
//! Measures recursive stack reversal, the two queue implementations side by
//! side, and the snapshot/restore cost that every undoable command pays.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dsviz_engine::command::{DataStructureCommand, History};
use dsviz_engine::state::StateTransfer;
use dsviz_engine::structures::{BinarySearchTree, LinkedList, Queue, Stack, TwoStackQueue};
use std::hint::black_box;

// =============================================================================
// 1. Stack Reverse
// =============================================================================

fn benchmark_stack_reverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stack_reverse");

    for size in [10, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            let stack: Stack<i32> = (0..size).collect();
            bencher.iter(|| {
                let mut stack = stack.clone();
                stack.reverse();
                black_box(stack)
            });
        });
    }

    group.finish();
}

// =============================================================================
// 2. Queue Comparison
// =============================================================================

fn benchmark_queue_fifo(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("queue_fifo");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("ring_buffer", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut queue = Queue::new();
                for value in 0..size {
                    queue.enqueue(black_box(value));
                }
                while let Some(value) = queue.dequeue() {
                    black_box(value);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("two_stack", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut queue = TwoStackQueue::new();
                for value in 0..size {
                    queue.enqueue(black_box(value));
                }
                while let Some(value) = queue.dequeue() {
                    black_box(value);
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// 3. Linked List Middle
// =============================================================================

fn benchmark_find_middle(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("linked_list_find_middle");

    for size in [100, 10_000] {
        let list: LinkedList<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.find_middle()));
        });
    }

    group.finish();
}

// =============================================================================
// 4. Balanced Construction
// =============================================================================

fn benchmark_build_balanced(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tree_build_balanced");

    for size in [127, 1_023, 8_191] {
        let sorted: Vec<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &sorted, |bencher, sorted| {
            bencher.iter(|| black_box(BinarySearchTree::build_balanced_from_sorted(sorted)));
        });
    }

    group.finish();
}

// =============================================================================
// 5. Snapshot and Restore
// =============================================================================

fn benchmark_snapshot_restore(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("snapshot_restore");

    for size in [100, 1_000] {
        let sorted: Vec<i32> = (0..size).collect();
        let tree = BinarySearchTree::build_balanced_from_sorted(&sorted).unwrap_or_default();
        group.bench_with_input(BenchmarkId::new("tree", size), &tree, |bencher, tree| {
            bencher.iter(|| {
                let mut restored = BinarySearchTree::new();
                restored.set_state(black_box(tree.get_state()));
                black_box(restored)
            });
        });

        let list: LinkedList<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("linked_list", size), &list, |bencher, list| {
            bencher.iter(|| {
                let mut restored = LinkedList::new();
                restored.set_state(black_box(list.get_state()));
                black_box(restored)
            });
        });
    }

    group.finish();
}

fn benchmark_history_undo_redo(criterion: &mut Criterion) {
    criterion.bench_function("history_undo_redo_50", |bencher| {
        bencher.iter(|| {
            let mut stack = Stack::new();
            let mut history = History::new();
            for value in 0..50 {
                history.execute(
                    &mut stack,
                    DataStructureCommand::new("Push", move |stack: &mut Stack<i32>| {
                        stack.push(value);
                    }),
                );
            }
            while history.undo(&mut stack) {}
            while history.redo(&mut stack) {}
            black_box(stack)
        });
    });
}

criterion_group!(
    benches,
    benchmark_stack_reverse,
    benchmark_queue_fifo,
    benchmark_find_middle,
    benchmark_build_balanced,
    benchmark_snapshot_restore,
    benchmark_history_undo_redo
);
criterion_main!(benches);
