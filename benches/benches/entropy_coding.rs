//! Benchmarks for canonical Huffman construction and bit packing
//!
//! Run with: cargo bench --bench entropy_coding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pif_bitstream::{BitReader, BitWriter};
use pif_huffman::{
    build_tree, canonical_codes, count_frequencies, initial_codes, lengths_from_codes,
    rebuild_tree_from_lengths, ChannelCodebook,
};

fn samples(alphabet: u64, count: u64) -> Vec<u8> {
    // Skewed towards small values
    (0..count).map(|i| ((i * i + 7 * i) % alphabet % (1 + i % alphabet)) as u8).collect()
}

fn bench_codebook(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codebook Construction");

    for &alphabet in &[4u64, 16, 64, 256] {
        let data = samples(alphabet, 65_536);
        group.bench_with_input(BenchmarkId::from_parameter(alphabet), &data, |b, data| {
            b.iter(|| ChannelCodebook::build(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_canonical_rebuild(c: &mut Criterion) {
    let data = samples(256, 65_536);
    let root = build_tree(&count_frequencies(data)).unwrap();
    let lengths = lengths_from_codes(&initial_codes(&root)).unwrap();

    c.bench_function("canonical_codes_256", |b| {
        b.iter(|| canonical_codes(black_box(&lengths)).unwrap());
    });
    c.bench_function("rebuild_tree_256", |b| {
        b.iter(|| rebuild_tree_from_lengths(black_box(&lengths)).unwrap());
    });
}

fn bench_bit_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bit I/O");
    let bits_count = 1 << 20;

    group.bench_function("write_1M_bits", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(bits_count / 8 + 1);
            {
                let mut writer = BitWriter::new(&mut out);
                for i in 0..bits_count {
                    writer.write_bit(black_box(i % 3 == 0)).unwrap();
                }
                writer.flush().unwrap();
            }
            out
        });
    });

    let data = vec![0b1011_0010u8; bits_count / 8];
    group.bench_function("read_1M_bits", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(black_box(&data[..]));
            let mut ones = 0u32;
            while let Some(bit) = reader.read_bit().unwrap() {
                ones += bit as u32;
            }
            ones
        });
    });

    group.finish();
}

criterion_group!(benches, bench_codebook, bench_canonical_rebuild, bench_bit_io);
criterion_main!(benches);
