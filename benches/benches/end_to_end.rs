//! End-to-end encoding/decoding benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pif::{decode_from_slice, encode_to_vec, pack_rgb, EncoderOptions, PifEncoder, PifImage};

fn create_test_image(width: u32, height: u32) -> PifImage {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(pack_rgb(
                ((x * 255) / width) as u8,  // R
                ((y * 255) / height) as u8, // G
                128,                        // B
            ));
        }
    }
    PifImage::new(width, height, pixels).unwrap()
}

fn bench_encode_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode by Image Size");

    for &size in &[64u32, 128, 256, 512] {
        let image = create_test_image(size, size);

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| encode_to_vec(black_box(&image)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_encode_parallel_vs_serial(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode Codebook Threading");
    let image = create_test_image(512, 512);

    for parallel in [false, true] {
        let encoder = PifEncoder::new(EncoderOptions::new().parallel(parallel));
        group.bench_function(if parallel { "parallel" } else { "serial" }, |b| {
            b.iter(|| {
                let mut encoded = Vec::new();
                encoder.encode(black_box(&image), &mut encoded).unwrap();
                encoded
            });
        });
    }

    group.finish();
}

fn bench_decode_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode by Image Size");

    for &size in &[64u32, 128, 256, 512] {
        let encoded = encode_to_vec(&create_test_image(size, size)).unwrap();

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| decode_from_slice(black_box(&encoded)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_by_size,
    bench_encode_parallel_vs_serial,
    bench_decode_by_size
);
criterion_main!(benches);
