use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rijndael::{decrypt_block, encrypt_block, expand_key};

fn bench_expansion(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut group = c.benchmark_group("expansion");
    for (label, key_len) in [("aes128", 16usize), ("aes192", 24), ("aes256", 32)] {
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);
        group.bench_function(label, |b| {
            b.iter(|| expand_key(&key).unwrap());
        });
    }
    group.finish();
}

fn bench_block_transforms(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let schedule = expand_key(&key).unwrap();
    let nr = schedule.rounds();

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    let ciphertext = encrypt_block(&block, &schedule, nr).unwrap();

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &schedule, nr).unwrap());
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(&ciphertext, &schedule, nr).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_expansion, bench_block_transforms);
criterion_main!(benches);
