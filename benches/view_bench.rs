//! Benchmarks for catalog decoding and view projection
//!
//! Run with: cargo bench

use club_signup::{project_list, select_options, Activity, Catalog, ViewState};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_catalog(count: usize) -> Catalog {
    (0..count)
        .map(|i| {
            (0..i % 12).fold(
                Activity::new(format!("Activity {}", i), "Bench activity", "Mon 3:30 PM", 20),
                |activity, p| activity.participant(format!("student{}@example.com", p)),
            )
        })
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [10, 100, 1000] {
        let json = serde_json::to_string(&create_catalog(size)).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("catalog_{}", size), |b| {
            b.iter(|| serde_json::from_str::<Catalog>(black_box(&json)).unwrap())
        });
    }

    group.finish();
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("view");

    for size in [10, 100, 1000] {
        let catalog = create_catalog(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("apply_catalog_{}", size), |b| {
            let mut state = ViewState::new();
            b.iter(|| state.apply_catalog(black_box(catalog.clone())))
        });

        let mut state = ViewState::new();
        state.apply_catalog(catalog.clone());

        group.bench_function(format!("project_{}", size), |b| {
            b.iter(|| (project_list(black_box(&state)), select_options(&state)))
        });

        group.bench_function(format!("signup_patch_{}", size), |b| {
            b.iter(|| {
                let mut patched = state.clone();
                patched.add_participant("Activity 0", black_box("new@example.com"))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_view);
criterion_main!(benches);
