//! Performance benchmarks for the Headcount Dimensioning Engine.
//!
//! This benchmark suite tracks the cost of the calculation core:
//! - Erlang-C at growing agent counts
//! - A full day of 15-minute intervals (96) through the HC distribution
//! - A full dimensioning report, directly and over HTTP
//! - A batch of 100 dimensioning requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use staffing_engine::api::{AppState, create_router};
use staffing_engine::calculation::{calculate_hc_distribution, dimension, erlang_c};
use staffing_engine::config::ConfigLoader;
use staffing_engine::models::{CalculationParameters, PlanningPremise};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// A day-shaped volume curve: quiet nights, a morning ramp and an afternoon peak.
fn day_curve(scale: f64) -> (Vec<f64>, Vec<f64>) {
    let volume = (0..96)
        .map(|i| {
            let hour = i as f64 / 4.0;
            let shape = (-(hour - 14.0).powi(2) / 18.0).exp();
            (20.0 + 400.0 * shape) * scale
        })
        .collect();
    let tmi = (0..96).map(|i| 180.0 + (i % 4) as f64 * 15.0).collect();
    (volume, tmi)
}

fn day_premise(scale: f64) -> PlanningPremise {
    let (volume_curve, tmi_curve) = day_curve(scale);
    PlanningPremise {
        volume_curve,
        tmi_curve,
        tma_curve: vec![],
        unproductivity_percent: 15.0,
    }
}

/// Benchmark: Erlang-C at increasing agent counts, 90% loaded.
fn bench_erlang_c(c: &mut Criterion) {
    let mut group = c.benchmark_group("erlang_c");

    for agents in [10u32, 50, 200, 1000].iter() {
        let traffic = f64::from(*agents) * 0.9;
        group.bench_with_input(BenchmarkId::new("agents", agents), agents, |b, &agents| {
            b.iter(|| black_box(erlang_c(black_box(agents), black_box(traffic))))
        });
    }

    group.finish();
}

/// Benchmark: HC distribution for one day of 15-minute intervals.
fn bench_distribution_96(c: &mut Criterion) {
    let (volume, tmi) = day_curve(1.0);

    let mut group = c.benchmark_group("distribution");
    group.throughput(Throughput::Elements(96));
    group.bench_function("day_96_intervals", |b| {
        b.iter(|| {
            black_box(calculate_hc_distribution(
                black_box(&volume),
                black_box(&tmi),
                80.0,
                15.0,
            ))
        })
    });
    group.finish();
}

/// Benchmark: Full dimensioning report without the HTTP layer.
fn bench_dimension(c: &mut Criterion) {
    let loader = create_test_state().config().clone();
    let premise = day_premise(1.0);
    let params = CalculationParameters::new(80.0, premise.unproductivity_percent);

    c.bench_function("dimension_day", |b| {
        b.iter(|| black_box(dimension(black_box(&premise), &params, loader.config())))
    });
}

/// Benchmark: Dimensioning through POST /dimension.
fn bench_dimension_http(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({ "premise": day_premise(1.0) }).to_string();

    c.bench_function("dimension_http", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/dimension")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 dimensioning requests at varying volumes.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| {
            serde_json::json!({
                "premise": day_premise(0.5 + i as f64 / 100.0),
                "target_sla": if i % 2 == 0 { 80.0 } else { 90.0 }
            })
            .to_string()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));
    group.sample_size(10);

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/dimension")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_erlang_c,
    bench_distribution_96,
    bench_dimension,
    bench_dimension_http,
    bench_batch_100,
);
criterion_main!(benches);
