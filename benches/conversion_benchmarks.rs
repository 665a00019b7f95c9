//! Conversion throughput in both directions.

use bijoy_oxide::mapping::{apply, tables, TableRole};
use bijoy_oxide::text::reorder::{reorder, ReorderMode};
use bijoy_oxide::{bijoy_to_unicode, unicode_to_bijoy, ConversionDirection};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const PARAGRAPH: &str = "আমি বাংলায় কথা বলি। প্রেম কিন্তু বিশ্ব জুড়ে ছড়িয়ে আছে। \
                         সূর্য পূর্ব দিকে ওঠে, শিক্ষা রাষ্ট্রের মেরুদণ্ড। ";

fn unicode_text(repeat: usize) -> String {
    PARAGRAPH.repeat(repeat)
}

fn bench_directions(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for repeat in [1usize, 16, 256] {
        let unicode = unicode_text(repeat);
        let bijoy = unicode_to_bijoy(&unicode);

        group.throughput(Throughput::Bytes(unicode.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("unicode_to_bijoy", repeat),
            &unicode,
            |b, text| b.iter(|| black_box(unicode_to_bijoy(black_box(text)))),
        );

        group.throughput(Throughput::Bytes(bijoy.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("bijoy_to_unicode", repeat),
            &bijoy,
            |b, text| b.iter(|| black_box(bijoy_to_unicode(black_box(text)))),
        );
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let unicode = unicode_text(16);
    let core = tables::table(ConversionDirection::LogicalToLegacy, TableRole::Core);
    let visual = reorder(&unicode, ReorderMode::Inverse);

    let mut group = c.benchmark_group("stages");
    group.throughput(Throughput::Bytes(unicode.len() as u64));

    group.bench_function("reorder_inverse", |b| {
        b.iter(|| black_box(reorder(black_box(&unicode), ReorderMode::Inverse)))
    });
    group.bench_function("reorder_forward", |b| {
        b.iter(|| black_box(reorder(black_box(&visual), ReorderMode::Forward)))
    });
    group.bench_function("core_substitution", |b| {
        b.iter(|| black_box(apply(core, black_box(&visual))))
    });

    group.finish();
}

criterion_group!(benches, bench_directions, bench_stages);
criterion_main!(benches);
