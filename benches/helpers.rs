use subrand::helpers::{DEFAULT_CHARSET, get_nonce, get_random_string};
use subrand::rng::Prng;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_nonce(c: &mut Criterion) {
    let mut rng = Prng::from_seed(42);
    c.bench_function("nonce 32 chars", |b| {
        b.iter(|| get_nonce(black_box(32), &mut rng))
    });
}

pub fn bench_random_string(c: &mut Criterion) {
    let mut rng = Prng::from_seed(42);
    c.bench_function("random string 32 chars", |b| {
        b.iter(|| get_random_string(black_box(32), &mut rng, DEFAULT_CHARSET))
    });
}

criterion_group!(benches, bench_nonce, bench_random_string);
criterion_main!(benches);
