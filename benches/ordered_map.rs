use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use orderedmap_rs::OrderedMap;

const MAP_SIZE: i64 = 1_000;

fn filled_map() -> OrderedMap<i64, i64> {
    let mut map = OrderedMap::with_capacity(MAP_SIZE as usize);
    for i in 0..MAP_SIZE {
        map.insert(i, i + 1);
    }
    map
}

fn put_benchmark(c: &mut Criterion) {
    c.bench_function("ordered_map put", |b| {
        b.iter(|| black_box(filled_map()))
    });
}

fn get_benchmark(c: &mut Criterion) {
    let map = filled_map();
    c.bench_function("ordered_map get", |b| {
        b.iter(|| {
            for i in 0..MAP_SIZE {
                black_box(map.get(&i));
            }
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    c.bench_function("ordered_map remove", |b| {
        b.iter(|| {
            let mut map = filled_map();
            //drain front-to-back, the worst case for the order scan
            for i in 0..MAP_SIZE {
                map.remove(&i);
            }
            black_box(map.is_empty())
        })
    });
}

fn keys_benchmark(c: &mut Criterion) {
    let map = filled_map();
    c.bench_function("ordered_map keys", |b| {
        b.iter(|| black_box(map.keys().collect::<Vec<_>>()))
    });
}

fn values_benchmark(c: &mut Criterion) {
    let map = filled_map();
    c.bench_function("ordered_map values", |b| {
        b.iter(|| black_box(map.values().collect::<Vec<_>>()))
    });
}

fn size_benchmark(c: &mut Criterion) {
    let map = filled_map();
    c.bench_function("ordered_map size", |b| {
        b.iter(|| black_box(map.len()))
    });
}

criterion_group!(
    benchmark,
    put_benchmark,
    get_benchmark,
    remove_benchmark,
    keys_benchmark,
    values_benchmark,
    size_benchmark
);
criterion_main!(benchmark);
