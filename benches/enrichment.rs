use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use go_enrich::annotations::{FeatureId, FeatureRecord};
use go_enrich::{analyze, AnnotationIndex, FeatureSet};

/// Builds a synthetic genome with `n_features` features spread over
/// `n_terms` GO terms, a few terms per feature.
fn synthetic_records(n_features: u32, n_terms: u32) -> Vec<FeatureRecord> {
    (0..n_features)
        .map(|i| {
            let mut record = FeatureRecord::new(format!("F{i:06}"), "gene");
            for k in 0..3 {
                let term = (i.wrapping_mul(31).wrapping_add(k * 7)) % n_terms;
                record = record.with_ontology_term(format!("GO:{term:07}"), "synthetic process");
            }
            record
        })
        .collect()
}

fn build_index_benchmark(c: &mut Criterion) {
    let records = synthetic_records(10_000, 500);
    c.bench_function("build annotation index", |b| {
        b.iter(|| {
            AnnotationIndex::from_records(black_box(records.clone()))
                .expect("records are valid")
                .universe_len()
        })
    });
}

fn analyze_benchmark(c: &mut Criterion) {
    let records = synthetic_records(10_000, 500);
    let index = AnnotationIndex::from_records(records).expect("records are valid");
    let set: FeatureSet = (0..200u32)
        .map(|i| FeatureId::from(format!("F{:06}", i * 17)))
        .collect();
    c.bench_function("analyze enrichment", |b| {
        b.iter(|| analyze(black_box(&index), black_box(&set)).expect("pipeline succeeds"))
    });
}

criterion_group! {
    name = enrichment;
    config = Criterion::default().sample_size(20).measurement_time(Duration::from_secs(10));
    targets = build_index_benchmark, analyze_benchmark
}
criterion_main!(enrichment);
