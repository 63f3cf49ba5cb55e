// benches/pivot.rs
use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use llm_catalog::aggregate::ComparisonDetail;
use llm_catalog::types::{Benchmark, ComparisonTable, Model};

const NAMES: &[&str] = &[
    "MMLU", "HellaSwag", "TruthfulQA", "GSM8K", "HumanEval",
    "MATH", "BBH", "ARC-C", "WinoGrande", "DROP",
];

/// `models` columns, each with every benchmark but one plus a duplicate.
fn sample(models: i64) -> ComparisonDetail {
    let models_vec: Vec<Model> = (1..=models)
        .map(|id| Model { id, name: format!("model-{id}"), provider_id: 1, ..Model::default() })
        .collect();

    let mut benchmarks_by_model = HashMap::new();
    for m in &models_vec {
        let skip = (m.id as usize) % NAMES.len();
        let mut rows: Vec<Benchmark> = NAMES
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(i, n)| Benchmark {
                id: m.id * 100 + i as i64,
                model_id: m.id,
                benchmark_name: (*n).to_string(),
                score: Some(50.0 + i as f64 * 3.5),
                unit: (i % 2 == 0).then(|| "accuracy".to_string()),
                ..Benchmark::default()
            })
            .collect();
        let dup = Benchmark { benchmark_name: "MMLU".into(), score: Some(1.0), ..rows[0].clone() };
        rows.push(dup);
        benchmarks_by_model.insert(m.id, rows);
    }

    ComparisonDetail {
        table: ComparisonTable { id: 1, name: "bench".into(), ..ComparisonTable::default() },
        models: models_vec,
        benchmarks_by_model,
        pricing_by_model: HashMap::new(),
    }
}

fn bench_pivot(c: &mut Criterion) {
    let small = sample(4);
    let wide = sample(40);

    c.bench_function("pivot_4_models", |b| {
        b.iter(|| {
            let p = black_box(&small).pivot();
            black_box(p.rows.len())
        })
    });

    c.bench_function("pivot_40_models", |b| {
        b.iter(|| {
            let p = black_box(&wide).pivot();
            black_box(p.rows.len())
        })
    });

    c.bench_function("benchmark_names_40_models", |b| {
        b.iter(|| black_box(&wide).all_benchmark_names().len())
    });
}

criterion_group!(benches, bench_pivot);
criterion_main!(benches);
