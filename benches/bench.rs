use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sapling::binary_search_tree::{VecBinarySearchTree, VecDequeBinarySearchTree};

#[derive(Clone)]
enum TreeEnum<T: Ord> {
    Vec(VecBinarySearchTree<T>),
    VecDeque(VecDequeBinarySearchTree<T>),
}

impl<T: Ord> TreeEnum<T> {
    fn contains(&self, x: &T) -> bool {
        match self {
            Self::Vec(t) => !t.find(x).is_end(),
            Self::VecDeque(t) => !t.find(x).is_end(),
        }
    }

    fn insert(&mut self, x: T) -> bool {
        match self {
            Self::Vec(t) => t.insert(x).1,
            Self::VecDeque(t) => t.insert(x).1,
        }
    }

    fn walk(&self) -> usize {
        match self {
            Self::Vec(t) => t.iter().count(),
            Self::VecDeque(t) => t.iter().count(),
        }
    }
}

/// Pushes `lo..hi` in the order which produces a perfectly balanced tree when inserted.
fn balanced_order(lo: i32, hi: i32, out: &mut Vec<i32>) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    out.push(mid);
    balanced_order(lo, mid, out);
    balanced_order(mid + 1, hi, out);
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// storages of BSTs before finishing the group. Trees are built in balanced order,
/// since inserting sorted values degrades the tree into a list.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut TreeEnum<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let mut order = Vec::new();
        balanced_order(0, num_nodes, &mut order);

        let tree_tests = [
            ("vec", TreeEnum::Vec(order.iter().copied().collect())),
            ("vec-deque", TreeEnum::VecDeque(order.iter().copied().collect())),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

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
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _value = black_box(tree.contains(&i));
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "insert-duplicate", |tree, i| {
        tree.insert(i);
    });
    bench_helper(c, "find-miss", |tree, i| {
        let _value = black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "walk", |tree, _| {
        let _value = black_box(tree.walk());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
