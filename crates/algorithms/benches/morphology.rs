//! Benchmarks for morphology operators and the full pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use morfo_algorithms::imagery::{binarize_otsu, ThresholdParams};
use morfo_algorithms::morphology::{closing, dilate, erode, gradient, opening, StructuringElement};
use morfo_algorithms::pipeline::{run_pipeline, PipelineParams};
use morfo_core::{Bgr, ColorImage, Plane};

const SIZES: [usize; 3] = [256, 512, 1024];

fn create_test_mask(size: usize) -> Plane<u8> {
    // Scattered discs, roughly coin sized
    let mut p = Plane::new(size, size);
    let step = 64;
    for row in 0..size {
        for col in 0..size {
            let dr = (row % step) as isize - 32;
            let dc = (col % step) as isize - 32;
            if dr * dr + dc * dc <= 20 * 20 {
                p.set(row, col, 255u8).unwrap();
            }
        }
    }
    p
}

fn create_test_image(size: usize) -> ColorImage {
    let mask = create_test_mask(size);
    let mut img = ColorImage::filled(size, size, Bgr::new(200, 210, 220));
    for ((row, col), &m) in mask.data().indexed_iter() {
        if m == 255 {
            let shade = ((row * 7 + col * 13) % 40) as u8;
            img.set(row, col, Bgr::new(40 + shade, 70 + shade, 90 + shade)).unwrap();
        }
    }
    img
}

macro_rules! bench_operator {
    ($fn_name:ident, $op:ident, $iterations:expr) => {
        fn $fn_name(c: &mut Criterion) {
            let mut group = c.benchmark_group(concat!("morphology/", stringify!($op)));
            let se = StructuringElement::Square(2);
            for size in SIZES {
                let mask = create_test_mask(size);
                group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                    b.iter(|| $op(black_box(&mask), &se, $iterations).unwrap())
                });
            }
            group.finish();
        }
    };
}

bench_operator!(bench_erode, erode, 1);
bench_operator!(bench_dilate, dilate, 1);
bench_operator!(bench_opening, opening, 2);
bench_operator!(bench_closing, closing, 2);
bench_operator!(bench_gradient, gradient, 1);

fn bench_otsu(c: &mut Criterion) {
    let mut group = c.benchmark_group("imagery/otsu");
    for size in SIZES {
        let mask = create_test_mask(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| binarize_otsu(black_box(&mask), &ThresholdParams::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);
    let params = PipelineParams::default();
    for size in SIZES {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| run_pipeline(black_box(&image), &params).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_erode,
    bench_dilate,
    bench_opening,
    bench_closing,
    bench_gradient,
    bench_otsu,
    bench_pipeline,
);
criterion_main!(benches);
