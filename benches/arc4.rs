//! Benchmarks for the ARC4-style cipher
//!
//! This benchmark suite tests key scheduling, keystream generation
//! throughput, and the additive transform layer for various sizes.

use arcadd::{decrypt, encrypt, generate_keystream, Arc4};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Benchmark key scheduling (permutation setup) for various key lengths
fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc4_key_schedule");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for key_len in [5usize, 16, 32, 64] {
        let mut key = vec![0u8; key_len];
        rng.fill(&mut key[..]);

        group.bench_with_input(BenchmarkId::from_parameter(key_len), &key, |b, key| {
            b.iter(|| {
                let cipher = Arc4::new(black_box(key)).unwrap();
                black_box(cipher);
            });
        });
    }

    group.finish();
}

/// Benchmark keystream generation throughput for various lengths
fn bench_keystream(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc4_keystream");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key = [0u8; 16];
    rng.fill(&mut key);

    for size in [64usize, 256, 1024, 4096, 16384, 65536] {
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let keystream = generate_keystream(black_box(&key), black_box(size)).unwrap();
                black_box(keystream);
            });
        });
    }

    group.finish();
}

/// Benchmark the additive transform layer (encrypt and decrypt)
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc4_transform");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key = [0u8; 16];
    rng.fill(&mut key);

    for size in [256usize, 4096, 65536] {
        group.throughput(Throughput::Bytes(size as u64));

        let mut plaintext = vec![0u8; size];
        rng.fill(&mut plaintext[..]);
        let keystream = generate_keystream(&key, size).unwrap();
        let ciphertext = encrypt(&plaintext, &keystream).unwrap();

        group.bench_with_input(
            BenchmarkId::new("encrypt", size),
            &plaintext,
            |b, plaintext| {
                b.iter(|| {
                    let ciphertext = encrypt(black_box(plaintext), black_box(&keystream)).unwrap();
                    black_box(ciphertext);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("decrypt", size),
            &ciphertext,
            |b, ciphertext| {
                b.iter(|| {
                    let plaintext = decrypt(black_box(ciphertext), black_box(&keystream)).unwrap();
                    black_box(plaintext);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark streaming in-place encryption with a live generator
fn bench_in_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc4_in_place");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key = [0u8; 16];
    rng.fill(&mut key);

    let size = 4096usize;
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("encrypt_4096", |b| {
        let mut cipher = Arc4::new(&key).unwrap();
        let mut buffer = vec![0u8; size];
        rng.fill(&mut buffer[..]);

        b.iter(|| {
            cipher.encrypt_in_place(black_box(&mut buffer));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_key_schedule,
    bench_keystream,
    bench_transform,
    bench_in_place
);
criterion_main!(benches);
