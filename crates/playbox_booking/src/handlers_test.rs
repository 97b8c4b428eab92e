#[cfg(test)]
mod tests {
    use crate::logic::{BookingResponse, SlotsQuery};

    #[test]
    fn slots_query_deserializes_from_url_shape() {
        let query: SlotsQuery =
            serde_json::from_str(r#"{"sport_id": 3, "date": "2026-08-06"}"#).unwrap();
        assert_eq!(query.sport_id, 3);
        assert_eq!(query.date, "2026-08-06");
    }

    #[test]
    fn booking_response_always_carries_the_slot_list() {
        let response = BookingResponse {
            success: false,
            message: "Slot already booked.".to_string(),
            booking: None,
            slots: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        // callers rely on the field being present even when empty
        assert!(json.get("slots").is_some());
        assert_eq!(json["success"], false);
    }
}
