use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use avl_dict::{AvlTreeMap, InsertStrategy};

const N: i32 = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).collect();
    values.shuffle(&mut rng);

    c.bench_function("map_insert", |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::new();
            for value in &values {
                map.insert(*value, *value, InsertStrategy::FromRoot);
            }
            map
        })
    });

    c.bench_function("map_insert_ascending_from_root", |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::new();
            for value in 0..N {
                map.insert(value, value, InsertStrategy::FromRoot);
            }
            map
        })
    });

    c.bench_function("map_insert_ascending_from_max", |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::new();
            for value in 0..N {
                map.insert(value, value, InsertStrategy::FromMax);
            }
            map
        })
    });

    let mut map = AvlTreeMap::new();
    for value in &values {
        map.insert(*value, *value, InsertStrategy::FromRoot);
    }

    c.bench_function("map_search", |b| {
        b.iter(|| {
            for value in &values {
                black_box(map.search(value));
            }
        })
    });

    c.bench_function("map_to_sorted_vec", |b| b.iter(|| black_box(map.to_sorted_vec())));

    c.bench_function("map_delete", |b| {
        b.iter(|| {
            let mut map = map.clone();
            for value in &values {
                if let Some(node) = map.search(value) {
                    map.delete(node);
                }
            }
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
