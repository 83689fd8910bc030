//! Benchmarks for codec throughput.
//!
//! Run with: cargo bench
//!
//! Synthetic workloads cover the ASCII fast path, mixed-width text, and
//! the decoder's malformed-input handling.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use layjson::codec::{decode, encode};

/// Mostly-ASCII text with some multi-byte units mixed in, as element text
/// tends to look in practice.
fn mixed_units(len: usize) -> Vec<u32> {
    (0..len)
        .map(|i| match i % 17 {
            0 => 0xE9,     // two-byte form
            5 => 0xAC10,   // three-byte form
            11 => 0x1F600, // four-byte form
            _ => 0x41 + (i % 26) as u32,
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let ascii: Vec<u32> = (0..10_000).map(|i| 0x20 + (i % 95) as u32).collect();
    let mixed = mixed_units(10_000);

    c.bench_function("encode_ascii_10k", |b| {
        b.iter(|| encode(black_box(&ascii)))
    });
    c.bench_function("encode_mixed_10k", |b| {
        b.iter(|| encode(black_box(&mixed)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut units = mixed_units(10_000);
    units.push(0x1F600);
    let mixed = encode(&units);
    let mut truncated = mixed.clone();
    truncated.truncate(truncated.len() - 1);

    c.bench_function("decode_mixed_10k", |b| {
        b.iter(|| decode(black_box(&mixed)))
    });
    c.bench_function("decode_truncated_10k", |b| {
        b.iter(|| decode(black_box(&truncated)))
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
