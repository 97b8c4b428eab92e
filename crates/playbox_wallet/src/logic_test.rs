#[cfg(test)]
mod tests {
    use crate::error::WalletError;
    use crate::logic::{normalize_card_uid, resolve_admin_name, validate_amount};
    use playbox_config::{AppConfig, ServerConfig, WalletConfig};

    fn config_with_admin(name: Option<&str>) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            use_booking: false,
            use_wallet: true,
            use_identity: false,
            core_api: None,
            booking: None,
            wallet: Some(WalletConfig {
                default_admin_name: name.map(str::to_string),
            }),
            identity: None,
        }
    }

    #[test]
    fn amounts_must_be_strictly_positive_and_finite() {
        assert!(validate_amount(250.0).is_ok());
        assert!(validate_amount(0.01).is_ok());

        for bad in [0.0, -50.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match validate_amount(bad) {
                Err(WalletError::InvalidAmount(_)) => {}
                other => panic!("expected InvalidAmount for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn card_uids_are_trimmed_and_must_not_be_blank() {
        assert_eq!(normalize_card_uid("  04A1B2C3 ").unwrap(), "04A1B2C3");
        assert!(matches!(
            normalize_card_uid("   "),
            Err(WalletError::MissingField("card_uid"))
        ));
        assert!(matches!(
            normalize_card_uid(""),
            Err(WalletError::MissingField("card_uid"))
        ));
    }

    #[test]
    fn admin_name_falls_back_to_config_then_placeholder() {
        let config = config_with_admin(Some("Front Desk"));
        assert_eq!(resolve_admin_name(&config, Some("Ravi")), "Ravi");
        assert_eq!(resolve_admin_name(&config, Some("   ")), "Front Desk");
        assert_eq!(resolve_admin_name(&config, None), "Front Desk");

        let bare = config_with_admin(None);
        assert_eq!(resolve_admin_name(&bare, None), "Unknown Admin");
    }
}
