//! Criterion benchmarks for netgauge-engine.
//!
//! A realistic cycle carries one origins and one bogon sample per routed
//! prefix (hundreds of thousands), so per-sample cost dominates.

use std::hint::black_box;

use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};

use netgauge_core::{GaugeConfig, MetricKind, Sample};
use netgauge_engine::EvaluationEngine;

fn routing_samples(prefixes: usize, cycle: usize) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(prefixes * 2);
    for i in 0..prefixes {
        let prefix = format!("10.{}.{}.0/24", (i >> 8) & 0xff, i & 0xff);
        let origins = if i % 1000 == 0 && cycle % 2 == 1 { 2.0 } else { 1.0 };
        samples.push(Sample::count(MetricKind::Origins, prefix.clone(), origins));
        let asn = if i % 5000 == 0 { 64512 } else { 13335 };
        samples.push(Sample::origin(MetricKind::BogonAsns, prefix, asn, 200));
    }
    samples
}

fn bench_evaluate_10k_prefixes(c: &mut Criterion) {
    let config = GaugeConfig::default();
    let mut engine = EvaluationEngine::from_config(&config).unwrap();
    let batches: Vec<Vec<Sample>> = (0..4).map(|cycle| routing_samples(10_000, cycle)).collect();
    for batch in &batches {
        engine.evaluate(batch);
    }

    let mut cycle = 0usize;
    c.bench_function("evaluate_10k_prefixes", |bench| {
        bench.iter(|| {
            cycle += 1;
            black_box(engine.evaluate(&batches[cycle % batches.len()]))
        });
    });
}

fn bench_aggregate_1k_findings(c: &mut Criterion) {
    let config = GaugeConfig::default();
    let mut engine = EvaluationEngine::from_config(&config).unwrap();
    let samples: Vec<Sample> = (0..1000)
        .map(|i| Sample::tally(MetricKind::Tls, format!("site-{i}.example"), 50, 100, None))
        .collect();
    let findings = engine.evaluate(&samples);

    c.bench_function("aggregate_1k_findings", |bench| {
        bench.iter(|| black_box(engine.verdict(findings.clone(), Utc::now(), 0)));
    });
}

criterion_group!(benches, bench_evaluate_10k_prefixes, bench_aggregate_1k_findings);
criterion_main!(benches);
