use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cindep_validate::{InputValidator, SampleArray};
use ndarray::Array2;

fn sample_triple(n: usize) -> (SampleArray, SampleArray, SampleArray) {
    let x = Array2::from_shape_fn((n, 2), |(i, j)| ((i * 31 + j * 7) % 97) as f64);
    let y = Array2::from_shape_fn((n, 1), |(i, _)| ((i * 13) % 41) as f32);
    let z = Array2::from_shape_fn((n, 3), |(i, j)| ((i + j) % 5) as i64);
    (
        SampleArray::from(&x),
        SampleArray::from(&y),
        SampleArray::from(&z),
    )
}

fn bench_validate(c: &mut Criterion) {
    let validator = InputValidator::default();
    let mut group = c.benchmark_group("validate");

    for n in [100_usize, 10_000, 1_000_000] {
        let (x, y, z) = sample_triple(n);
        group.bench_with_input(BenchmarkId::new("mixed_dtypes", n), &n, |b, _| {
            b.iter(|| {
                validator
                    .validate(black_box(&x), black_box(&y), black_box(&z), Some(1000))
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_rejection(c: &mut Criterion) {
    let validator = InputValidator::default();
    let (x, _, z) = sample_triple(10_000);
    let mut values = vec![0.0_f64; 10_000];
    if let Some(last) = values.last_mut() {
        *last = f64::NAN;
    }
    let y = SampleArray::from(values);

    c.bench_function("reject_nan_at_end", |b| {
        b.iter(|| validator.validate(black_box(&x), black_box(&y), black_box(&z), None).is_err());
    });
}

criterion_group!(benches, bench_validate, bench_rejection);
criterion_main!(benches);
