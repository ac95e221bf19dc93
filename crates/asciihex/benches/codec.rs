//! Benchmark – `asciihex::encode` / `asciihex::decode`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Produce a *deterministic* payload of `len` bytes. `printable_ratio` out of
/// every 16 bytes are plain ASCII letters, the rest cycle through control,
/// introducer, and high bytes so every escape form is exercised.
fn make_payload(len: usize, printable_ratio: usize) -> Vec<u8> {
    const ESCAPED: [u8; 5] = [0x00, b'\n', b'~', b'^', 0xC3];
    (0..len)
        .map(|i| {
            if i % 16 < printable_ratio {
                b'a' + (i % 26) as u8
            } else {
                ESCAPED[i % ESCAPED.len()]
            }
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for (name, ratio) in [("text", 15), ("mixed", 8), ("binary", 0)] {
        let payload = make_payload(64 * 1024, ratio);
        let encoded = asciihex::encode(&payload);

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", name), &payload, |b, p| {
            b.iter(|| asciihex::encode(black_box(p)));
        });

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::new("decode", name), &encoded, |b, e| {
            b.iter(|| asciihex::decode(black_box(e)).expect("valid encoding"));
        });

        group.bench_with_input(BenchmarkId::new("scan", name), &encoded, |b, e| {
            b.iter(|| asciihex::scan(black_box(e)).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
