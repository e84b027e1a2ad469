//! Route table and middleware stack.
//!
//! Layers (outermost first): access log, CORS, security headers, body
//! limit. Handlers use `State<AppContext>`.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::AppContext;
use crate::config::MAX_BODY_BYTES;

/// Build the full application router.
pub fn api_router(ctx: AppContext, cors_origin: &str) -> Router {
    let api = Router::new()
        .route(
            "/symptom-check",
            get(endpoints::symptoms::list).post(endpoints::symptoms::check),
        )
        .route("/symptom-check/:id", get(endpoints::symptoms::detail))
        .route(
            "/awareness-alert",
            get(endpoints::alerts::list).post(endpoints::alerts::create),
        )
        .route("/awareness-alert/:id", get(endpoints::alerts::detail));

    let mut router = Router::new()
        .route("/", get(endpoints::health::info))
        .route("/health", get(endpoints::health::check))
        .nest("/api", api)
        .fallback(endpoints::not_found)
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    for layer in middleware::security_headers::layers() {
        router = router.layer(layer);
    }

    router
        .layer(middleware::cors::layer(cors_origin))
        .layer(axum::middleware::from_fn(middleware::access_log::log_access))
}
