//! Benchmarks for RC5 key expansion and single-block transforms.
//!
//! Measures key schedule cost as the round count grows, and encrypt/decrypt
//! throughput for the nominal parameter set of each word size.

use benches::{BENCH_KEY, PARAMETER_SETS, expanded};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rc5_cipher::{Parameters, Rc5, Word, expand_key};
use std::hint::black_box;

/// Benchmarks `expand_key()` for RC5-32 with increasing round counts.
///
/// The table has `2(r + 1)` entries and mixing runs three passes over it, so
/// cost grows linearly with `r`.
fn bench_expand_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_key");

    for rounds in [0u32, 12, 20, 255] {
        let parameters = Parameters::new(32, rounds, BENCH_KEY.len())
            .expect("benchmark parameters must be valid");

        group.bench_with_input(
            BenchmarkId::from_parameter(rounds),
            &parameters,
            |b, parameters| {
                b.iter(|| expand_key::<u32>(black_box(parameters), black_box(BENCH_KEY)));
            },
        );
    }

    group.finish();
}

fn bench_block<W: Word>(c: &mut Criterion, rounds: u32, key_length: usize, sample: [W; 2]) {
    let cipher: Rc5<W> = expanded(rounds, key_length);
    let mut group = c.benchmark_group(format!("rc5_{}_{}_{}", W::BITS, rounds, key_length));
    group.throughput(Throughput::Bytes(2 * W::BYTES as u64));

    group.bench_function("encrypt", |b| {
        b.iter(|| cipher.encrypt(black_box(sample)));
    });

    group.bench_function("decrypt", |b| {
        b.iter(|| cipher.decrypt(black_box(sample)));
    });

    group.finish();
}

/// Benchmarks single-block encrypt and decrypt for each word size.
fn bench_blocks(c: &mut Criterion) {
    let [w16, w32, w64] = PARAMETER_SETS;

    bench_block::<u16>(c, w16.1, w16.2, [0x0123, 0x4567]);
    bench_block::<u32>(c, w32.1, w32.2, [0x0123_4567, 0x89AB_CDEF]);
    bench_block::<u64>(
        c,
        w64.1,
        w64.2,
        [0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210],
    );
}

criterion_group!(rc5_benches, bench_expand_key, bench_blocks);
criterion_main!(rc5_benches);
