use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pathway::open::{parse_mode, OpenIntent, OpenOptions};

fn bench_parse_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_mode");

    for mode in ["r", "wb", "a+", "rwabxc"] {
        group.bench_function(mode, |b| b.iter(|| parse_mode(black_box(mode))));
    }

    group.bench_function("rejected", |b| b.iter(|| parse_mode(black_box("rz"))));

    group.finish();
}

fn bench_resolve_intent(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_intent");

    let options = OpenOptions {
        read: Some(true),
        charset: Some("utf-8".to_string()),
        ..Default::default()
    };

    group.bench_function("mode_only", |b| {
        b.iter(|| OpenIntent::resolve(black_box(Some("wb")), None));
    });

    group.bench_function("options_only", |b| {
        b.iter(|| OpenIntent::resolve(None, black_box(Some(&options))));
    });

    group.bench_function("mode_over_options", |b| {
        b.iter(|| {
            OpenIntent::resolve(black_box(Some("x")), black_box(Some(&options)))
                .map(OpenIntent::with_default_access)
        });
    });

    group.bench_function("options_from_pairs", |b| {
        b.iter(|| OpenOptions::from_pairs(black_box([("read", "yes"), ("charset", "latin1")])));
    });

    group.bench_function("stream_kind", |b| {
        let intent = OpenIntent::resolve(None, Some(&options)).unwrap_or_default();
        b.iter(|| black_box(&intent).stream_kind());
    });

    group.finish();
}

criterion_group!(benches, bench_parse_mode, bench_resolve_intent);
criterion_main!(benches);
