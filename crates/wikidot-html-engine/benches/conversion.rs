use criterion::{Criterion, criterion_group, criterion_main};
use wikidot_html_engine::{ConvertOptions, Converter, render_fragment};
mod common;

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.sample_size(10);

    let content = common::generate_wikidot_content(100);
    let converter = Converter::default();
    group.bench_function("document", |b| {
        b.iter(|| {
            let html = converter.convert(std::hint::black_box(&content));
            std::hint::black_box(html)
        });
    });

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    let options = ConvertOptions::default();

    for depth in [4, 32] {
        let line = common::generate_nested_formatting(depth);
        group.bench_function(format!("nested_{depth}"), |b| {
            b.iter(|| {
                let html = render_fragment(std::hint::black_box(&line), &options);
                std::hint::black_box(html)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_document, bench_inline);
criterion_main!(benches);
