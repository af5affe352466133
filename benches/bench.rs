use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use simple_bst::BinarySearchTree;

/// Inserts the midpoint of the range first, then recurses into both halves.
/// Because the tree never rebalances, this insertion order is what produces
/// a perfectly balanced tree.
fn fill_midpoint_first(tree: &mut BinarySearchTree<i32>, lo: i32, hi: i32) {
    if lo > hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    tree.insert(mid);
    fill_midpoint_first(tree, lo, mid - 1);
    fill_midpoint_first(tree, mid + 1, hi);
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for
/// various tree sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut BinarySearchTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3u32, 7, 11, 15] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let mut tree = BinarySearchTree::new();
        fill_midpoint_first(&mut tree, 0, largest_element_in_tree);

        let id = BenchmarkId::from_parameter(largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

/// Compares building a tree from sorted input (which degenerates into a
/// chain) against building it in midpoint-first order (which stays
/// balanced).
fn bench_build_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for num_nodes in [127, 1023] {
        group.bench_function(BenchmarkId::new("sorted", num_nodes), |b| {
            b.iter(|| {
                let mut tree = BinarySearchTree::new();
                for x in 0..num_nodes {
                    tree.insert(black_box(x));
                }
                tree
            })
        });

        group.bench_function(BenchmarkId::new("midpoint", num_nodes), |b| {
            b.iter(|| {
                let mut tree = BinarySearchTree::new();
                fill_midpoint_first(&mut tree, 0, num_nodes - 1);
                tree
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _value = black_box(tree.search(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _value = black_box(tree.search(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });

    bench_helper(c, "in-order", |tree, _| {
        let _values = black_box(tree.in_order());
    });

    bench_build_orders(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
