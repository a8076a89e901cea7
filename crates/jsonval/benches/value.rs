use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};
use jsonval::{dump, parse, FormatOptions, Value};

static DOCUMENT: &str = r#"
{
    "batch": 17,
    "complete": false,
    "entries": [
        {"id": 1, "tags": ["a", "b"], "score": 0.75},
        {"id": 2, "tags": [], "score": 0.5},
        {"id": 3, "tags": ["c"], "score": null}
    ],
    "source": "https://example.com/feed"
}
"#;

fn bench_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("value");

    group.bench_function("parse", |b| {
        b.iter(|| parse(DOCUMENT).expect("valid document"));
    });

    let value = parse(DOCUMENT).expect("valid document");
    group.bench_function("dump", |b| b.iter(|| dump(&value)));
    group.bench_function("dump minified", |b| {
        b.iter(|| jsonval::dump_with(&value, &FormatOptions::minified()));
    });

    group.bench_function("recursive is", |b| {
        b.iter(|| value["entries"].is::<Vec<Value>>());
    });
    group.bench_function("cast", |b| {
        b.iter(|| value["entries"][0]["tags"].cast::<Vec<String>>().expect("typed"));
    });

    group.finish();
}

criterion_group!(benches, bench_value);
criterion_main!(benches);
