// Benchmark for availability derivation
// Measures slot checks and per-week available-day scans

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use week_scheduler::models::availability::UnavailabilityTable;
use week_scheduler::services::availability::AvailabilityService;
use week_scheduler::services::time_snap::GridMetrics;
use week_scheduler::services::week::WeekNavigator;

fn week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 22).unwrap()
}

fn bench_slot_check(c: &mut Criterion) {
    let table = UnavailabilityTable::sample();
    let service = AvailabilityService::new(&table);
    let start = week_start().and_hms_opt(9, 0, 0).unwrap() + Duration::days(1);

    let mut group = c.benchmark_group("is_slot_available");
    for hours in [1i64, 4, 12] {
        group.bench_with_input(BenchmarkId::from_parameter(hours), &hours, |b, &hours| {
            let end = start + Duration::hours(hours);
            b.iter(|| service.is_slot_available(black_box(start), black_box(end)))
        });
    }
    group.finish();
}

fn bench_available_days(c: &mut Criterion) {
    let table = UnavailabilityTable::sample();
    let service = AvailabilityService::new(&table);
    let metrics = GridMetrics::default();

    c.bench_function("available_days_one_week", |b| {
        let dates = WeekNavigator::new(week_start()).visible_dates();
        b.iter(|| service.available_days(black_box(&dates), metrics.hours()))
    });

    c.bench_function("available_days_one_year", |b| {
        let dates: Vec<NaiveDate> = (0..365).map(|i| week_start() + Duration::days(i)).collect();
        b.iter(|| service.available_days(black_box(&dates), metrics.hours()))
    });
}

criterion_group!(benches, bench_slot_check, bench_available_days);
criterion_main!(benches);
