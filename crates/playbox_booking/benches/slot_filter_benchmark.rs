use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use playbox_booking::logic::visible_slots;
use playbox_common::models::Slot;

fn fixed_now() -> DateTime<Tz> {
    Tz::Asia__Kolkata
        .with_ymd_and_hms(2026, 8, 6, 10, 30, 0)
        .unwrap()
}

// Helper function to build a day of hourly slots, repeated `days` times
fn create_slots(days: i64) -> Vec<Slot> {
    let base = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let mut slots = Vec::new();
    for day in 0..days {
        let date = base + chrono::Duration::days(day);
        for hour in 0u32..24 {
            slots.push(Slot {
                id: day * 24 + hour as i64,
                slot_date: date,
                start_time: format!("{:02}:00", hour),
                end_time: format!("{:02}:00", (hour + 1) % 24),
                booked: hour % 3 == 0,
            });
        }
    }
    slots
}

fn benchmark_visible_slots(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_slots");
    let now = fixed_now();
    let today = now.date_naive();

    group.bench_function("one_day", |b| {
        let slots = create_slots(1);
        b.iter(|| {
            visible_slots(
                black_box(slots.clone()),
                black_box(today),
                black_box(now),
            )
        })
    });

    group.bench_function("thirty_days", |b| {
        let slots = create_slots(30);
        b.iter(|| {
            visible_slots(
                black_box(slots.clone()),
                black_box(today),
                black_box(now),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_visible_slots);
criterion_main!(benches);
