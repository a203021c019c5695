use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kvconf::{from_str, parse, tokenize};
use serde::Deserialize;

#[derive(Deserialize)]
#[allow(dead_code)]
struct Service {
    host: String,
    port: u16,
    timeout: f64,
    debug: bool,
}

const SERVICE_CONF: &str = "# service\nhost = api.example.com\nport = 8080\ntimeout = 2.5\ndebug = off\n";

fn generate_config(size: usize) -> String {
    (0..size)
        .map(|i| match i % 4 {
            0 => format!("key_{} = {}\n", i, i),
            1 => format!("key_{} = {}.25 # float\n", i, i),
            2 => format!("key_{} = yes\n", i),
            _ => format!("key_{} = /srv/data/shard_{}.db\n", i, i),
        })
        .collect()
}

fn benchmark_tokenize_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_line");

    group.bench_function("integer", |b| b.iter(|| tokenize(black_box("port = 8080"))));
    group.bench_function("path", |b| {
        b.iter(|| tokenize(black_box("log_file = /var/log/app.log")))
    });
    group.bench_function("comment", |b| {
        b.iter(|| tokenize(black_box("# just a comment line that is ignored")))
    });

    group.finish();
}

fn benchmark_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 100, 1000].iter() {
        let config = generate_config(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, config| {
            b.iter(|| parse(black_box(config)))
        });
    }
    group.finish();
}

fn benchmark_export(c: &mut Criterion) {
    let doc = parse(&generate_config(100)).unwrap();

    let mut group = c.benchmark_group("export");
    group.bench_function("to_map", |b| b.iter(|| black_box(&doc).to_map()));
    group.bench_function("to_text_compact", |b| {
        b.iter(|| black_box(&doc).to_text(None))
    });
    group.bench_function("to_text_indented", |b| {
        b.iter(|| black_box(&doc).to_text(Some(4)))
    });
    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let doc = parse(&generate_config(1000)).unwrap();

    c.bench_function("get_last_key", |b| {
        b.iter(|| doc.get(black_box("key_999")))
    });
}

fn benchmark_deserialize(c: &mut Criterion) {
    c.bench_function("deserialize_struct", |b| {
        b.iter(|| from_str::<Service>(black_box(SERVICE_CONF)))
    });
}

criterion_group!(
    benches,
    benchmark_tokenize_line,
    benchmark_parse_document,
    benchmark_export,
    benchmark_lookup,
    benchmark_deserialize
);
criterion_main!(benches);
