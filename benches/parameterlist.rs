//! Benchmarks for parameter normalization.
//!
//! Measures the operations on the signing path of a request:
//! - Sorting a list with duplicate names
//! - Producing the normalized parameter string
//! - Filtering the protocol parameters
//! - Name-based lookups with prefix fallback

extern crate oauth_params;

use criterion::{criterion_group, criterion_main, Criterion};
use oauth_params::{Parameter, ParameterList};
use std::hint::black_box;

/// A request carrying the usual protocol parameters plus `count` application parameters.
fn request_parameters(count: usize) -> ParameterList {
    let mut params = ParameterList::new();
    params.set_multi([
        ("consumer_key", "dpf43f3p2l4k3l03"),
        ("token", "nnch734d00sl2jdk"),
        ("signature_method", "HMAC-SHA1"),
        ("timestamp", "1191242096"),
        ("nonce", "kllo9940pd9333jh"),
        ("version", "1.0"),
    ]);

    for i in 0..count {
        // every fourth name repeats, to exercise the value tie-break
        params.add(Parameter::new(
            format!("param{}", i % (count / 4).max(1)),
            format!("value {} & more", count - i),
        ));
    }

    params
}

/// Benchmark sorting a 100-parameter list.
fn bench_sort(c: &mut Criterion) {
    let params = request_parameters(100);

    c.bench_function("list_sort_100", |b| {
        b.iter(|| {
            let mut list = params.clone();
            list.sort();
            black_box(list)
        });
    });
}

/// Benchmark building the normalized parameter string.
fn bench_normalized_string(c: &mut Criterion) {
    let mut params = request_parameters(100);
    params.sort();

    c.bench_function("list_encoded_100", |b| {
        b.iter(|| black_box(black_box(&params).encoded()));
    });
}

/// Benchmark extracting the protocol parameters.
fn bench_oauth_only(c: &mut Criterion) {
    let params = request_parameters(100);

    c.bench_function("list_oauth_only_100", |b| {
        b.iter(|| black_box(black_box(&params).oauth_only()));
    });
}

/// Benchmark lookups that hit, fall back to the prefixed name, and miss.
fn bench_lookup(c: &mut Criterion) {
    let params = request_parameters(100);

    c.bench_function("list_get_literal", |b| {
        b.iter(|| black_box(params.get(black_box("oauth_nonce"))));
    });

    c.bench_function("list_get_prefixed", |b| {
        b.iter(|| black_box(params.get(black_box("nonce"))));
    });

    c.bench_function("list_get_missing", |b| {
        b.iter(|| black_box(params.get(black_box("missing"))));
    });
}

/// Benchmark parsing an encoded parameter string.
fn bench_from_encoded(c: &mut Criterion) {
    let encoded = request_parameters(100).encoded();

    c.bench_function("list_from_encoded_100", |b| {
        b.iter(|| {
            let list = ParameterList::from_encoded(black_box(&encoded)).unwrap();
            black_box(list)
        });
    });
}

criterion_group!(
    benches,
    bench_sort,
    bench_normalized_string,
    bench_oauth_only,
    bench_lookup,
    bench_from_encoded
);
criterion_main!(benches);
