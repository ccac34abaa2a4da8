//! Benchmarks for population scoring and the ranking view pipeline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jimotode::config::ScoringConfig;
use jimotode::{
    apply, score_population, CompanyRecord, FilterState, FilterToggle, RawValue, SortDirection,
    SortKey, SortState,
};
use std::hint::black_box;

const INDUSTRIES: [&str; 4] = ["製造業", "情報通信業", "建設業", "金融・保険業"];

fn create_company(i: usize) -> CompanyRecord {
    let disclosed = i % 7 != 0;
    CompanyRecord {
        industry: INDUSTRIES[i % INDUSTRIES.len()].to_string(),
        base_salary: if disclosed {
            RawValue::text(format!("{},000円", 180 + (i * 37) % 150))
        } else {
            RawValue::text("N/A")
        },
        number_of_employees: RawValue::Number((10 + (i * 53) % 5000) as f64),
        annual_holidays: RawValue::Number((95 + (i * 11) % 35) as f64),
        revenue: RawValue::text(format!("{}億円", 1 + i % 900)),
        remote_work: RawValue::Bool(i % 3 == 0),
        relocation: RawValue::text(if i % 2 == 0 { "none" } else { "あり" }),
        fixed_overtime_system: RawValue::Bool(i % 5 == 0),
        ..CompanyRecord::new(i.to_string(), format!("広島企業{}", i))
    }
}

fn create_companies(n: usize) -> Vec<CompanyRecord> {
    (0..n).map(create_company).collect()
}

fn bench_score_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_population");
    let config = ScoringConfig::default();

    for size in [100, 1_000, 10_000] {
        let companies = create_companies(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &companies, |b, companies| {
            b.iter(|| black_box(score_population(black_box(companies), &config)));
        });
    }

    group.finish();
}

fn bench_view_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_pipeline");
    let (_, scored) = score_population(&create_companies(5_000), &ScoringConfig::default());

    let default_sort = SortState::default();
    group.bench_function("default_order", |b| {
        b.iter(|| black_box(apply(black_box(&scored), &FilterState::default(), &default_sort)));
    });

    let filter = FilterState::new()
        .with(FilterToggle::RemoteWork)
        .with(FilterToggle::RelocationFree)
        .with(FilterToggle::NoFixedOvertime)
        .with_query("企業1");
    let revenue_sort = SortState::new(SortKey::Revenue, SortDirection::Ascending);
    group.bench_function("filtered_search_by_revenue", |b| {
        b.iter(|| black_box(apply(black_box(&scored), &filter, &revenue_sort)));
    });

    group.finish();
}

criterion_group!(benches, bench_score_population, bench_view_pipeline);
criterion_main!(benches);
