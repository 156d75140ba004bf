use aqi_animator::generators::{dummy_aqi, DateRange, SyntheticGenerator};
use aqi_animator::models::{AqiScale, Station};
use aqi_animator::processors::{TableAssembler, TableChecker, TimestampSelector};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_station_network(station_count: usize) -> Vec<Station> {
    (0..station_count)
        .map(|i| {
            Station::new(
                format!("Test Station {}", i),
                28.5 + (i as f64) * 0.001,
                77.0 + (i as f64) * 0.001,
            )
        })
        .collect()
}

fn date_range(days: i64) -> DateRange {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    DateRange::new(start, start + chrono::Duration::days(days - 1))
}

fn benchmark_dummy_aqi(c: &mut Criterion) {
    c.bench_function("dummy_aqi", |b| {
        b.iter(|| {
            for hour in 0..24 {
                black_box(dummy_aqi(black_box("Dwarka-Sector 8"), hour));
            }
        })
    });
}

fn benchmark_generate_and_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_and_assemble");

    for &stations in &[5usize, 50, 200] {
        let generator = SyntheticGenerator::new(create_station_network(stations));
        let range = date_range(30);

        group.bench_with_input(BenchmarkId::from_parameter(stations), &stations, |b, _| {
            b.iter(|| {
                let batches = generator.generate_range(black_box(range), None);
                black_box(TableAssembler::new().assemble(batches))
            })
        });
    }

    group.finish();
}

fn benchmark_selection_and_check(c: &mut Criterion) {
    let generator = SyntheticGenerator::new(create_station_network(50));
    let table = TableAssembler::new().assemble(generator.generate_range(date_range(365), None));
    let scale = AqiScale::standard();

    c.bench_function("timestamp_selection", |b| {
        b.iter(|| black_box(TimestampSelector::new().select(black_box(&table))))
    });

    c.bench_function("table_check", |b| {
        b.iter(|| black_box(TableChecker::new().check(black_box(&table), &scale)))
    });
}

criterion_group!(
    benches,
    benchmark_dummy_aqi,
    benchmark_generate_and_assemble,
    benchmark_selection_and_check
);
criterion_main!(benches);
