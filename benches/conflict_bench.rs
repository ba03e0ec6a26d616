// Benchmark for the schedule conflict scan
// Measures the per-keystroke cost of checking a candidate against a full adviser calendar

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use thesis_consult::models::schedule::ScheduleEntry;
use thesis_consult::services::schedule::find_conflict;

fn hhmm(total_minutes: u32) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Back-to-back 30-minute slots spread across consecutive days.
fn build_entries(count: usize) -> Vec<ScheduleEntry> {
    let first_day = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    (0..count)
        .map(|i| {
            let day = first_day + chrono::Days::new((i / 16) as u64);
            let start = 8 * 60 + (i % 16) as u32 * 30;
            ScheduleEntry::new(7, day, hhmm(start), hhmm(start + 30))
        })
        .collect()
}

fn bench_conflict_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflict_scan");

    for count in [10usize, 100, 1000].iter() {
        let entries = build_entries(*count);

        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, entries| {
            b.iter(|| {
                // Worst case: a clear candidate forces a full scan.
                find_conflict(
                    black_box("2025-06-10"),
                    black_box("06:00"),
                    black_box("06:30"),
                    entries,
                )
            })
        });
    }

    group.finish();
}

fn bench_conflict_hit_first(c: &mut Criterion) {
    let entries = build_entries(1000);

    c.bench_function("conflict_hit_first", |b| {
        b.iter(|| {
            find_conflict(
                black_box("2025-06-10"),
                black_box("08:00"),
                black_box("09:00"),
                &entries,
            )
        })
    });
}

criterion_group!(benches, bench_conflict_scan, bench_conflict_hit_first);
criterion_main!(benches);
