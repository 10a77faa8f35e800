use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use classic_algos::sort::{bubble_sort, merge_sort, quicksort};

/// Helper to bench an in-place sort on reversed and already sorted input of various sizes.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Vec<i32>)) {
    let mut group = c.benchmark_group(name);

    for len in [16, 256, 1024] {
        let inputs = [
            ("reversed", (0..len).rev().collect::<Vec<i32>>()),
            ("sorted", (0..len).collect::<Vec<i32>>()),
        ];
        for (shape, input) in inputs {
            group.bench_with_input(BenchmarkId::new(shape, len), &input, |b, input| {
                b.iter_batched_ref(|| input.clone(), |items| f(black_box(items)), BatchSize::SmallInput)
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "bubble_sort", |items| bubble_sort(items));
    bench_helper(c, "merge_sort", |items| {
        black_box(merge_sort(items));
    });
    bench_helper(c, "quicksort", |items| quicksort(items));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
