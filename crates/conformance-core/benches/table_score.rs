use conformance_core::{Feature, FeatureTable, SupportEntry, SupportRecord};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_table(features: usize) -> FeatureTable {
    let vendors = vec!["GCC".to_string(), "Clang".to_string(), "MSVC".to_string()];
    let rows = (0..features)
        .map(|i| {
            Feature::new(format!("feature-{}", i), vec![format!("P{:04}R0", i)])
                .with_record(SupportRecord::new(
                    "GCC",
                    vec![SupportEntry::partial(format!("{}", 5 + i % 10)), SupportEntry::full(format!("{}", 6 + i % 10))],
                ))
                .with_record(SupportRecord::new(
                    "Clang",
                    vec![SupportEntry::full(format!("{}.0.0 (Update {})", 3 + i % 16, i % 3))],
                ))
                .with_record(SupportRecord::new("MSVC", vec![SupportEntry::full("Yes")]))
        })
        .collect();
    FeatureTable::new("synthetic", vendors, rows)
}

fn bench_support_score(c: &mut Criterion) {
    let table = synthetic_table(200);
    c.bench_function("support_score/200 features", |b| {
        b.iter(|| table.support_score(black_box("Clang"), black_box(Some("12.0.0"))).unwrap())
    });
    c.bench_function("ranking/200 features", |b| {
        b.iter(|| table.ranking(black_box(None)).unwrap())
    });
}

criterion_group!(benches, bench_support_score);
criterion_main!(benches);
