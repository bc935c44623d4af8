//! Benchmarks for duotone-ops operations.
//!
//! Run with: cargo bench -p duotone-ops

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use duotone_ops::{duotone, parallel, resample, DuotoneParams, Palette};

/// Generate a synthetic RGBA gradient image.
fn generate_gradient(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / width.max(1)) as u8);
            data.push((y * 255 / height.max(1)) as u8);
            data.push(((x + y) * 255 / (width + height).max(1)) as u8);
            data.push(255);
        }
    }
    data
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("duotone_apply");
    let params = DuotoneParams::new(0.8, 1.2, 1.0);
    let palette = Palette::default();

    for size in [512u32, 1024, 2048].iter() {
        let src = generate_gradient(*size, *size);
        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));

        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{}x{}", size, size)),
            &src,
            |b, src| {
                b.iter(|| {
                    duotone::apply_rgba8(black_box(src), *size, *size, &params, &palette).unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", format!("{}x{}", size, size)),
            &src,
            |b, src| {
                b.iter(|| {
                    parallel::apply_rgba8(black_box(src), *size, *size, &params, &palette).unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");

    for size in [1024u32, 2048, 4096].iter() {
        let src = generate_gradient(*size, *size);
        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));

        group.bench_with_input(
            BenchmarkId::new("fit_to_800", format!("{}x{}", size, size)),
            &src,
            |b, src| {
                b.iter(|| {
                    resample::resample_rgba8(black_box(src), *size, *size, 800, 800).unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("fit_to_800_parallel", format!("{}x{}", size, size)),
            &src,
            |b, src| {
                b.iter(|| {
                    parallel::resample_rgba8(black_box(src), *size, *size, 800, 800).unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_apply, bench_resample);
criterion_main!(benches);
