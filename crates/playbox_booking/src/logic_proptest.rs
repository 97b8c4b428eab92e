#[cfg(test)]
mod tests {
    use crate::logic::{is_present_or_future_slot, parse_slot_time, visible_slots};
    use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};
    use chrono_tz::Tz;
    use playbox_common::models::Slot;
    use proptest::prelude::*;

    const TZ: Tz = Tz::Asia__Kolkata;

    fn fixed_now() -> DateTime<Tz> {
        TZ.with_ymd_and_hms(2026, 8, 6, 10, 30, 0).unwrap()
    }

    fn clock(hour: u32, minute: u32) -> String {
        format!("{:02}:{:02}", hour, minute)
    }

    proptest! {
        // Any date strictly after today is included, whatever the time says
        #[test]
        fn future_days_dominate_time_of_day(
            days_ahead in 1i64..3650,
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let now = fixed_now();
            let date = now.date_naive() + Duration::days(days_ahead);
            prop_assert!(is_present_or_future_slot(date, &clock(hour, minute), now));
        }

        // Any date strictly before today is excluded, whatever the time says
        #[test]
        fn past_days_are_always_excluded(
            days_back in 1i64..3650,
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let now = fixed_now();
            let date = now.date_naive() - Duration::days(days_back);
            prop_assert!(!is_present_or_future_slot(date, &clock(hour, minute), now));
        }

        // On the current date, inclusion is exactly "end time strictly after now"
        #[test]
        fn today_is_governed_by_the_end_time(
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let now = fixed_now();
            let end = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
            let included = is_present_or_future_slot(now.date_naive(), &clock(hour, minute), now);
            prop_assert_eq!(included, end > now.time());
        }

        // Whatever does not parse as a clock time is never offered today
        #[test]
        fn unparseable_times_fail_closed(raw in "[a-zA-Z ]{0,12}") {
            prop_assume!(parse_slot_time(&raw).is_none());
            let now = fixed_now();
            prop_assert!(!is_present_or_future_slot(now.date_naive(), &raw, now));
        }

        // Both clock renderings of the same instant agree
        #[test]
        fn twelve_and_twenty_four_hour_forms_agree(
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let twenty_four = clock(hour, minute);
            let suffix = if hour >= 12 { "PM" } else { "AM" };
            let hour12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            let twelve = format!("{:02}:{:02} {}", hour12, minute, suffix);
            prop_assert_eq!(parse_slot_time(&twenty_four), parse_slot_time(&twelve));
        }

        // Filtering never invents slots and keeps only offered ones
        #[test]
        fn visible_slots_is_a_subset(
            days_offset in -5i64..5,
            bookings in proptest::collection::vec(any::<bool>(), 0..24),
        ) {
            let now = fixed_now();
            let date = now.date_naive() + Duration::days(days_offset);
            let slots: Vec<Slot> = bookings
                .iter()
                .enumerate()
                .map(|(i, booked)| Slot {
                    id: i as i64,
                    slot_date: date,
                    start_time: clock(i as u32 % 24, 0),
                    end_time: clock((i as u32 + 1) % 24, 0),
                    booked: *booked,
                })
                .collect();

            let total = slots.len();
            let visible = visible_slots(slots.clone(), date, now);
            prop_assert!(visible.len() <= total);
            for kept in &visible {
                prop_assert!(slots.iter().any(|s| s.id == kept.id));
                prop_assert!(is_present_or_future_slot(date, &kept.end_time, now));
            }
        }
    }

    // NaiveDate round-trips through its Display form, which is the wire
    // format the upstream uses for query parameters.
    proptest! {
        #[test]
        fn query_dates_round_trip(
            year in 2020i32..2100,
            month in 1u32..13,
            day in 1u32..29,
        ) {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let parsed = crate::logic::parse_query_date(&date.to_string()).unwrap();
            prop_assert_eq!(date, parsed);
        }
    }
}
