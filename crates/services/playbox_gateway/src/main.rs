// File: crates/services/playbox_gateway/src/main.rs
use axum::{routing::get, Router};
use playbox_booking::routes as booking_routes;
use playbox_common::{is_booking_enabled, is_identity_enabled, is_wallet_enabled, logging};
use playbox_config::load_config;
use playbox_identity::routes as identity_routes;
use playbox_wallet::routes as wallet_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

mod service_factory;
use service_factory::GatewayServices;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    logging::init();

    let services = GatewayServices::new(config.clone());

    let mut api_router =
        Router::new().route("/", get(|| async { "Welcome to PlayBox Gateway API!" }));

    if is_identity_enabled(&config) {
        info!("Mounting identity routes");
        api_router = api_router.merge(identity_routes::routes(
            config.clone(),
            services.sessions.clone(),
        ));
    }
    if is_booking_enabled(&config) {
        info!("Mounting booking routes");
        api_router = api_router.merge(booking_routes::routes(
            config.clone(),
            services.sessions.clone(),
        ));
    }
    if is_wallet_enabled(&config) {
        info!("Mounting wallet routes");
        api_router = api_router.merge(wallet_routes::routes(
            config.clone(),
            services.sessions.clone(),
        ));
    }

    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use playbox_booking::doc::BookingApiDoc;
        use playbox_identity::doc::IdentityApiDoc;
        use playbox_wallet::doc::WalletApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the merged OpenAPI documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "PlayBox Gateway API",
                version = "0.1.0",
                description = "Sports-facility booking and Elite Card wallet gateway",
            ),
            components(),
            tags( (name = "PlayBox", description = "Core gateway endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        openapi_doc.merge(WalletApiDoc::openapi());
        openapi_doc.merge(IdentityApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve the single-page frontend in dev mode
    if cfg!(debug_assertions) {
        info!("Running in development mode, serving static files from ../../dist");

        let static_router = Router::new().nest_service("/static", ServeDir::new("../../dist"));
        app = app.merge(static_router);
        app = app.fallback_service(ServeDir::new("../dist"));
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
