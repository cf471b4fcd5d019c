use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use varjson::{parse, render};

/// A request template with a few hundred members and a sprinkling of variables.
fn sample_document() -> String {
    let mut doc = String::from("{\"items\": [");
    for i in 0..200 {
        if i > 0 {
            doc.push(',');
        }
        doc.push_str(&format!(
            "{{\"id\": {i}, \"owner\": $owner{i}, \"name\": \"item \\\"{i}\\\"\", \
             \"price\": {}.25, \"tags\": [\"a\", \"b\", $tag], \"active\": true}}",
            i * 3
        ));
    }
    doc.push_str("], \"total\": $total}");
    doc
}

fn bench_parse(c: &mut Criterion) {
    let doc = sample_document();
    c.bench_function("parse", |b| b.iter(|| parse(black_box(&doc)).unwrap()));
}

fn bench_render(c: &mut Criterion) {
    let node = parse(sample_document()).unwrap();
    c.bench_function("render", |b| b.iter(|| render(black_box(&node))));
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
