//! Benchmark – `jsondescent::parse` against `serde_json` on whole documents.
#![allow(missing_docs)]

use std::{fmt::Write, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// A single long string property. Exercises the plain-run fast path.
fn make_string_payload(target_len: usize) -> String {
    let overhead = "{\"data\":\"\"}".len();
    assert!(target_len >= overhead, "target_len must be >= {overhead}");

    let mut s = String::with_capacity(target_len);
    s.push_str("{\"data\":\"");
    s.extend(std::iter::repeat_n('a', target_len - overhead));
    s.push_str("\"}");
    debug_assert_eq!(s.len(), target_len);
    s
}

/// An array of small records with numbers, escapes and nesting.
fn make_records_payload(records: usize) -> String {
    let mut s = String::from("[");
    for i in 0..records {
        if i > 0 {
            s.push(',');
        }
        write!(
            s,
            r#"{{"id":{i},"score":{}.25e-1,"name":"item \"{i}\"\n","tags":["a","bé"],"ok":{},"next":null}}"#,
            i % 97,
            i % 2 == 0
        )
        .unwrap();
    }
    s.push(']');
    s
}

fn bench_parse(c: &mut Criterion) {
    let payloads = [
        ("string_10k", make_string_payload(10_000)),
        ("string_1m", make_string_payload(1_000_000)),
        ("records_100", make_records_payload(100)),
        ("records_10k", make_records_payload(10_000)),
    ];

    let mut group = c.benchmark_group("parse");
    for (name, payload) in &payloads {
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("jsondescent", name), payload, |b, p| {
            b.iter(|| black_box(jsondescent::parse(black_box(p)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("serde_json", name), payload, |b, p| {
            b.iter(|| black_box(serde_json::from_str::<serde_json::Value>(black_box(p)).unwrap()));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(10));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_parse }
criterion_main!(benches);
