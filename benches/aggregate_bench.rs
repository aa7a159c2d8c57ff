//! Benchmarks comparing the aggregates across element types and containers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_aggregates::{max_element, mean, sum, variance, Vector3};
use std::collections::LinkedList;

/// Generate test data with specific patterns
fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size).map(|i| (i as f64 * 0.1).sin() * 100.0).collect()
}

fn generate_vectors(size: usize) -> Vec<Vector3> {
    (0..size)
        .map(|i| {
            let t = i as f64 * 0.1;
            Vector3::new(t.sin(), t.cos(), t * 0.01)
        })
        .collect()
}

fn bench_element_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("variance_by_element_type");

    for &size in &[100, 10_000, 100_000] {
        let floats = generate_test_data(size);
        let ints: Vec<i32> = floats.iter().map(|&x| x as i32).collect();
        let vectors = generate_vectors(size);

        group.bench_with_input(BenchmarkId::new("f64", size), &floats, |b, data| {
            b.iter(|| black_box(variance(data)))
        });
        group.bench_with_input(BenchmarkId::new("i32", size), &ints, |b, data| {
            b.iter(|| black_box(variance(data)))
        });
        group.bench_with_input(BenchmarkId::new("vector3", size), &vectors, |b, data| {
            b.iter(|| black_box(variance(data)))
        });
    }

    group.finish();
}

fn bench_containers(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_by_container");

    for &size in &[1_000, 100_000] {
        let data = generate_test_data(size);
        let list: LinkedList<f64> = data.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("vec", size), &data, |b, data| {
            b.iter(|| black_box(sum(data)))
        });
        group.bench_with_input(BenchmarkId::new("linked_list", size), &list, |b, list| {
            b.iter(|| black_box(sum(list)))
        });
    }

    group.finish();
}

fn bench_mean_and_max(c: &mut Criterion) {
    let data = generate_test_data(10_000);

    c.bench_function("mean_f64_10000", |b| b.iter(|| black_box(mean(&data))));
    c.bench_function("max_element_f64_10000", |b| {
        b.iter(|| black_box(max_element(&data)))
    });
}

criterion_group!(benches, bench_element_types, bench_containers, bench_mean_and_max);
criterion_main!(benches);
