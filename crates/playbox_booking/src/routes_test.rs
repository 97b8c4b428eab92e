#[cfg(test)]
mod tests {
    use crate::routes::routes;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use playbox_common::services::{Session, SessionStore};
    use playbox_config::{AppConfig, CoreApiConfig, ServerConfig};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct NoSessions;

    impl SessionStore for NoSessions {
        fn load(&self, _token: &str) -> Option<Session> {
            None
        }
        fn save(&self, _session: Session) -> String {
            String::new()
        }
        fn clear(&self, _token: &str) {}
    }

    fn test_config(use_booking: bool) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            use_booking,
            use_wallet: false,
            use_identity: false,
            core_api: Some(CoreApiConfig {
                base_url: "http://localhost:8080/playbox".to_string(),
                timeout_secs: None,
            }),
            booking: None,
            wallet: None,
            identity: None,
        })
    }

    #[tokio::test]
    async fn unknown_paths_fall_through() {
        let app = routes(test_config(true), Arc::new(NoSessions));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn slots_route_honors_the_runtime_flag() {
        let app = routes(test_config(false), Arc::new(NoSessions));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/slots?sport_id=1&date=2026-08-06")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn my_bookings_requires_a_session() {
        let app = routes(test_config(true), Arc::new(NoSessions));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/bookings/me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
