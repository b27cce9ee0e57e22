use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use multibase::{decode_bytes, encode_to_vec, encodings};

// typical content identifier size
const PAYLOAD: [u8; 36] = [
    0x01, 0x71, 0x12, 0x20, 0x9b, 0x2e, 0x4c, 0x1f, 0x6a, 0x3d, 0x87, 0x00, 0x5e, 0xc1, 0x42, 0x9f,
    0x11, 0xd0, 0x7a, 0x63, 0xfe, 0x28, 0x04, 0xb9, 0x35, 0x8c, 0x6e, 0xa2, 0x17, 0xdd, 0x90, 0x4b,
    0x5f, 0x03, 0xc8, 0x76,
];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for (name, encoding) in encodings() {
        group.bench_function(name, |b| {
            b.iter(|| encode_to_vec(black_box(encoding), black_box(&PAYLOAD)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for (name, encoding) in encodings() {
        let Ok(text) = encode_to_vec(encoding, &PAYLOAD) else {
            continue;
        };
        group.bench_function(name, |b| b.iter(|| decode_bytes(black_box(&text))));
    }
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    for (name, encoding) in encodings() {
        group.bench_function(name, |b| {
            b.iter(|| {
                encode_to_vec(encoding, black_box(&PAYLOAD)).and_then(|text| decode_bytes(&text))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip);
criterion_main!(benches);
