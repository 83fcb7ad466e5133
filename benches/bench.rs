use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

use sort_bench_rs::{stable, unstable};
use sort_test_tools::{patterns, Sort};

const BENCH_SIZES: [usize; 3] = [100, 1_000, 4_000];

fn bench_pattern<S: Sort>(c: &mut Criterion, pattern_name: &str, pattern: fn(usize) -> Vec<i32>) {
    let mut group = c.benchmark_group(format!("{}/{}", S::name(), pattern_name));

    for len in BENCH_SIZES {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched_ref(|| pattern(len), |v| S::sort(v), BatchSize::SmallInput);
        });
    }

    group.finish();
}

fn bench_sort<S: Sort>(c: &mut Criterion) {
    bench_pattern::<S>(c, "random", patterns::random);
    bench_pattern::<S>(c, "ascending", patterns::ascending);
    bench_pattern::<S>(c, "descending", patterns::descending);
    bench_pattern::<S>(c, "random_zipf", |len| patterns::random_zipf(len, 1.0));
}

fn sort_benchmarks(c: &mut Criterion) {
    bench_sort::<unstable::rahmani::SortImpl>(c);
    bench_sort::<stable::insertion_sequential::SortImpl>(c);
    bench_sort::<unstable::insertion_binary::SortImpl>(c);
    bench_sort::<stable::mergesort::SortImpl>(c);
    bench_sort::<unstable::quicksort::SortImpl>(c);
}

criterion_group!(benches, sort_benchmarks);
criterion_main!(benches);
