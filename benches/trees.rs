use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeSet;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn shuffled_keys(size: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut keys: Vec<u64> = (0..size as u64).collect();
    keys.shuffle(&mut rng);
    keys
}

fn bench_btreeset(c: &mut Criterion) {
    let mut group = c.benchmark_group("btreeset");
    for &size in &SIZES {
        let keys = shuffled_keys(size);
        group.bench_with_input(BenchmarkId::new("insert", size), &keys, |b, keys| {
            b.iter(|| keys.iter().cloned().collect::<BTreeSet<u64>>())
        });

        let set: BTreeSet<u64> = keys.iter().cloned().collect();
        group.bench_with_input(BenchmarkId::new("search", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(set.get(key));
                }
            })
        });
    }
    group.finish();
}

macro_rules! tree_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use criterion::{black_box, BatchSize, BenchmarkId, Criterion};
                use search_trees::$type_name;
                use super::{shuffled_keys, SIZES};

                pub fn bench(c: &mut Criterion) {
                    let mut group = c.benchmark_group(stringify!($module_name));
                    for &size in &SIZES {
                        let keys = shuffled_keys(size);

                        group.bench_with_input(BenchmarkId::new("insert", size), &keys, |b, keys| {
                            b.iter(|| {
                                let mut tree = $type_name::new();
                                for key in keys {
                                    tree.insert(*key);
                                }
                                tree
                            })
                        });

                        let tree: $type_name<u64> = keys.iter().cloned().collect();
                        group.bench_with_input(BenchmarkId::new("search", size), &keys, |b, keys| {
                            b.iter(|| {
                                for key in keys {
                                    black_box(tree.search(key));
                                }
                            })
                        });

                        group.bench_with_input(BenchmarkId::new("delete", size), &keys, |b, keys| {
                            b.iter_batched(
                                || keys.iter().cloned().collect::<$type_name<u64>>(),
                                |mut tree| {
                                    for key in keys {
                                        black_box(tree.delete(key));
                                    }
                                    tree
                                },
                                BatchSize::LargeInput,
                            )
                        });
                    }
                    group.finish();
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset,
            $(
                $module_name::bench,
            )*
        );
    }
}

tree_benches!(
    bst: BinarySearchTree,
    avl_tree: AvlTree,
    red_black_tree: RedBlackTree,
);

criterion_main!(benches);
