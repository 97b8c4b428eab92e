#[cfg(test)]
mod tests {
    use crate::error::BookingError;
    use crate::logic::{
        confirm_booking, fetch_visible_slots, is_present_or_future_slot, parse_slot_time,
        resolve_payment_mode, visible_slots, DEFAULT_PAYMENT_MODE,
    };
    use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};
    use chrono_tz::Tz;
    use mockall::mock;
    use mockall::Sequence;
    use playbox_common::models::{Booking, Slot, SlotDetails, Sport};
    use playbox_common::services::BookingApi;

    mock! {
        pub Api {}

        #[async_trait::async_trait]
        impl BookingApi for Api {
            type Error = BookingError;
            async fn list_sports(&self) -> Result<Vec<Sport>, BookingError>;
            async fn list_slots(&self, sport_id: i64, date: NaiveDate) -> Result<Vec<Slot>, BookingError>;
            async fn slot_details(&self, slot_id: i64) -> Result<SlotDetails, BookingError>;
            async fn book_slot(&self, user_id: i64, slot_id: i64, payment_mode: &str) -> Result<Booking, BookingError>;
            async fn user_bookings(&self, user_id: i64) -> Result<Vec<Booking>, BookingError>;
        }
    }

    const TZ: Tz = Tz::Asia__Kolkata;

    fn at(hour: u32, minute: u32) -> DateTime<Tz> {
        TZ.with_ymd_and_hms(2026, 8, 6, hour, minute, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn slot(id: i64, date: NaiveDate, start: &str, end: &str, booked: bool) -> Slot {
        Slot {
            id,
            slot_date: date,
            start_time: start.to_string(),
            end_time: end.to_string(),
            booked,
        }
    }

    fn booking(id: i64, slot_id: i64) -> Booking {
        Booking {
            id,
            user_id: 9,
            sport_id: 3,
            slot_id,
            amount: 500.0,
            status: "CONFIRMED".to_string(),
            payment_mode: "WALLET".to_string(),
            created_at: "2026-08-06T10:00:00Z".to_string(),
        }
    }

    // --- Slot time filter ---

    #[test]
    fn future_dates_include_every_slot() {
        let now = at(10, 0);
        let tomorrow = today() + Duration::days(1);
        // Future day rule dominates time-of-day, even a long-past hour
        assert!(is_present_or_future_slot(tomorrow, "01:00", now));
        assert!(is_present_or_future_slot(tomorrow, "09:00", now));
        assert!(is_present_or_future_slot(
            today() + Duration::days(30),
            "00:30",
            now
        ));
    }

    #[test]
    fn past_dates_exclude_every_slot() {
        let now = at(10, 0);
        let yesterday = today() - Duration::days(1);
        assert!(!is_present_or_future_slot(yesterday, "23:00", now));
        assert!(!is_present_or_future_slot(
            today() - Duration::days(365),
            "18:00",
            now
        ));
    }

    #[test]
    fn today_compares_end_time_against_the_clock() {
        let now = at(10, 0);
        // date = today, slot end = "09:00", current time = "10:00" -> excluded
        assert!(!is_present_or_future_slot(today(), "09:00", now));
        // date = today, slot end = "18:00", current time = "10:00" -> included
        assert!(is_present_or_future_slot(today(), "18:00", now));
        // the comparison is strict
        assert!(!is_present_or_future_slot(today(), "10:00", now));
        assert!(is_present_or_future_slot(today(), "10:01", now));
    }

    #[test]
    fn malformed_end_times_are_never_offered() {
        let now = at(10, 0);
        assert!(!is_present_or_future_slot(today(), "", now));
        assert!(!is_present_or_future_slot(today(), "25:00", now));
        assert!(!is_present_or_future_slot(today(), "six pm", now));
        assert!(!is_present_or_future_slot(today(), "18h00", now));
    }

    #[test]
    fn midnight_end_reads_as_start_of_day() {
        // The last slot of the day ends at "00:00"; once the day has begun
        // that end time is behind any wall-clock instant.
        assert!(!is_present_or_future_slot(today(), "00:00", at(0, 1)));
        assert!(is_present_or_future_slot(today() + Duration::days(1), "00:00", at(0, 1)));
    }

    #[test]
    fn parse_slot_time_accepts_both_clock_formats() {
        assert_eq!(
            parse_slot_time("18:00"),
            NaiveTime::from_hms_opt(18, 0, 0)
        );
        assert_eq!(
            parse_slot_time("18:30:15"),
            NaiveTime::from_hms_opt(18, 30, 15)
        );
        assert_eq!(
            parse_slot_time("06:30 PM"),
            NaiveTime::from_hms_opt(18, 30, 0)
        );
        assert_eq!(
            parse_slot_time(" 06:30 AM "),
            NaiveTime::from_hms_opt(6, 30, 0)
        );
        assert_eq!(parse_slot_time("24:00"), None);
        assert_eq!(parse_slot_time("soon"), None);
    }

    #[test]
    fn visible_slots_filters_and_orders_by_start_time() {
        let now = at(10, 0);
        let slots = vec![
            slot(3, today(), "18:00", "19:00", false),
            slot(1, today(), "08:00", "09:00", false), // already over
            slot(2, today(), "11:00", "12:00", true),  // booked but still shown
            slot(4, today(), "10:30", "11:30", false),
            slot(5, today(), "??", "12:30", false), // bad start sorts last
        ];

        let visible = visible_slots(slots, today(), now);
        let ids: Vec<i64> = visible.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![4, 2, 3, 5]);
    }

    #[test]
    fn payment_mode_defaults_to_wallet() {
        let config = test_config(true);
        assert_eq!(resolve_payment_mode(&config, None), DEFAULT_PAYMENT_MODE);
        assert_eq!(resolve_payment_mode(&config, Some("CASH")), "CASH");
    }

    // --- Booking flow ---

    fn flow_date() -> NaiveDate {
        // far enough ahead that the visibility filter keeps everything
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
    }

    fn test_config(use_booking: bool) -> playbox_config::AppConfig {
        playbox_config::AppConfig {
            server: playbox_config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            use_booking,
            use_wallet: false,
            use_identity: false,
            core_api: Some(playbox_config::CoreApiConfig {
                base_url: "http://localhost:8080/playbox".to_string(),
                timeout_secs: None,
            }),
            booking: None,
            wallet: None,
            identity: None,
        }
    }

    #[tokio::test]
    async fn confirm_booking_refetches_after_success() {
        let date = flow_date();
        let mut api = MockApi::new();
        let mut seq = Sequence::new();

        api.expect_list_slots()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, d| Ok(vec![slot(42, d, "18:00", "19:00", false)]));
        api.expect_book_slot()
            .withf(|user_id, slot_id, payment_mode| {
                *user_id == 9 && *slot_id == 42 && payment_mode == "WALLET"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, slot_id, _| Ok(booking(100, slot_id)));
        api.expect_list_slots()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, d| Ok(vec![slot(42, d, "18:00", "19:00", true)]));

        let confirmation = confirm_booking(&api, TZ, 9, 3, date, 42, "WALLET")
            .await
            .expect("booking should succeed");

        assert_eq!(confirmation.booking.id, 100);
        // the returned availability reflects the just-made booking
        assert!(confirmation.slots.iter().all(|s| s.id != 42 || s.booked));
    }

    #[tokio::test]
    async fn upstream_rejection_surfaces_refreshed_availability() {
        let date = flow_date();
        let mut api = MockApi::new();
        let mut seq = Sequence::new();

        api.expect_list_slots()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, d| Ok(vec![slot(42, d, "18:00", "19:00", false)]));
        api.expect_book_slot()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| {
                Err(BookingError::ApiError {
                    status_code: 409,
                    message: "Slot already booked".to_string(),
                })
            });
        api.expect_list_slots()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, d| Ok(vec![slot(42, d, "18:00", "19:00", true)]));

        let err = confirm_booking(&api, TZ, 9, 3, date, 42, "WALLET")
            .await
            .expect_err("booking should fail");

        match err {
            BookingError::SlotUnavailable { message, slots } => {
                assert!(message.contains("already booked"), "message: {message}");
                // the post-failure refetch shows the slot as taken
                let taken = slots.iter().find(|s| s.id == 42).expect("slot present");
                assert!(taken.booked);
            }
            other => panic!("expected SlotUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn booking_a_slot_not_on_offer_is_rejected_without_an_upstream_call() {
        let date = flow_date();
        let mut api = MockApi::new();
        // only the pre-check fetch; book_slot must never be called
        api.expect_list_slots()
            .times(1)
            .returning(move |_, d| Ok(vec![slot(7, d, "18:00", "19:00", false)]));

        let err = confirm_booking(&api, TZ, 9, 3, date, 42, "WALLET")
            .await
            .expect_err("unknown slot must be rejected");
        assert!(err.is_conflict(), "got {err:?}");
    }

    #[tokio::test]
    async fn booking_a_visibly_booked_slot_is_rejected_locally() {
        let date = flow_date();
        let mut api = MockApi::new();
        api.expect_list_slots()
            .times(1)
            .returning(move |_, d| Ok(vec![slot(42, d, "18:00", "19:00", true)]));

        let err = confirm_booking(&api, TZ, 9, 3, date, 42, "WALLET")
            .await
            .expect_err("booked slot must be rejected");
        match err {
            BookingError::SlotUnavailable { slots, .. } => {
                assert_eq!(slots.len(), 1);
            }
            other => panic!("expected SlotUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failures_propagate_unchanged() {
        let date = flow_date();
        let mut api = MockApi::new();
        api.expect_list_slots().times(1).returning(|_, _| {
            Err(BookingError::InvalidDate("simulated transport stand-in".to_string()))
        });

        let err = confirm_booking(&api, TZ, 9, 3, date, 42, "WALLET")
            .await
            .expect_err("fetch failure must propagate");
        assert!(!err.is_conflict());
    }

    #[tokio::test]
    async fn refetch_without_intervening_change_is_idempotent() {
        let date = flow_date();
        let mut api = MockApi::new();
        api.expect_list_slots()
            .times(2)
            .returning(move |_, d| {
                Ok(vec![
                    slot(1, d, "10:00", "11:00", false),
                    slot(2, d, "11:00", "12:00", true),
                ])
            });

        let first = fetch_visible_slots(&api, TZ, 3, date).await.unwrap();
        let second = fetch_visible_slots(&api, TZ, 3, date).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn past_dates_yield_no_visible_slots() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let mut api = MockApi::new();
        api.expect_list_slots()
            .times(1)
            .returning(move |_, d| Ok(vec![slot(1, d, "10:00", "11:00", false)]));

        let visible = fetch_visible_slots(&api, TZ, 3, date).await.unwrap();
        assert!(visible.is_empty());
    }
}
