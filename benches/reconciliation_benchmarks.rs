use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use delivery_reconciler::models::{
    DestinationRequest, DestinationResponse, JobMetadata, ResponseParams,
};
use delivery_reconciler::strategy::{ResponseStrategy, TrackIdentifyStrategy};
use delivery_reconciler::BatchOptions;
use serde_json::json;

fn bulk_params(count: usize) -> ResponseParams {
    let events = (0..count)
        .map(|i| json!({"email": format!("user{i}@example.com"), "eventName": "Product Viewed"}))
        .collect();
    let rejected: Vec<String> = (0..count)
        .step_by(10)
        .map(|i| format!("user{i}@example.com"))
        .collect();

    ResponseParams::new(
        DestinationResponse::new(
            200,
            json!({
                "successCount": count - rejected.len(),
                "failCount": rejected.len(),
                "invalidEmails": rejected
            }),
        ),
        (0..count as i64).map(JobMetadata::with_job_id).collect(),
        Some(DestinationRequest::with_events(events)),
    )
}

fn benchmark_handle_success(c: &mut Criterion) {
    let mut group = c.benchmark_group("track_identify_handle_success");

    for count in [10usize, 100, 1000] {
        let params = bulk_params(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &params, |b, params| {
            let strategy = TrackIdentifyStrategy::default();
            b.iter(|| strategy.handle_success(black_box(params)))
        });
    }

    group.finish();
}

fn benchmark_batch_sizes(c: &mut Criterion) {
    let params = bulk_params(1000);
    let mut group = c.benchmark_group("track_identify_batch_size");

    for batch_size in [1usize, 50, 1000] {
        let strategy = TrackIdentifyStrategy::new(BatchOptions::new(batch_size));
        group.bench_with_input(BenchmarkId::from_parameter(batch_size), &params, |b, params| {
            b.iter(|| strategy.handle_success(black_box(params)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_handle_success, benchmark_batch_sizes);
criterion_main!(benches);
