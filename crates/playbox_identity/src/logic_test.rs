#[cfg(test)]
mod tests {
    use crate::error::IdentityError;
    use crate::logic::{normalize_phone, require_otp, UserProfile};

    #[test]
    fn phones_are_normalized_to_dialable_digits() {
        assert_eq!(normalize_phone("98765 43210").unwrap(), "9876543210");
        assert_eq!(normalize_phone("+91 98765-43210").unwrap(), "+919876543210");
        assert_eq!(normalize_phone("(987) 654-3210").unwrap(), "9876543210");
    }

    #[test]
    fn short_or_garbled_phones_are_rejected() {
        assert!(matches!(
            normalize_phone("12345"),
            Err(IdentityError::InvalidPhone(_))
        ));
        assert!(matches!(
            normalize_phone("call me maybe"),
            Err(IdentityError::InvalidPhone(_))
        ));
        // '+' is only allowed in front
        assert!(matches!(
            normalize_phone("98+7654321098"),
            Err(IdentityError::InvalidPhone(_))
        ));
        assert!(matches!(
            normalize_phone("   "),
            Err(IdentityError::MissingField("phone"))
        ));
    }

    #[test]
    fn otp_must_not_be_blank() {
        assert_eq!(require_otp(" 4321 ").unwrap(), "4321");
        assert!(matches!(
            require_otp(""),
            Err(IdentityError::MissingField("otp"))
        ));
    }

    #[test]
    fn profile_tolerates_sparse_upstream_payloads() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id": 9, "name": "Asha"}"#).unwrap();
        assert_eq!(profile.id, 9);
        assert!(profile.recent_transactions.is_empty());
        assert!(profile.current_balance.is_none());
    }
}
