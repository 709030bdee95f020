//! Router construction and shared request state.
//!
//! The router is built from an explicit [`Config`] so that tests can assemble
//! exactly the same stack the binary serves, over any [`AccountStore`].

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{self, accounts, health},
    middleware::https::{ForceHttps, force_https},
    store::AccountStore,
};

/// State shared with every handler.
///
/// Holds nothing mutable of its own; the store is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }
}

/// Headers attached to every response, including errors and redirects.
const SECURITY_HEADERS: [(HeaderName, &str); 4] = [
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (
        header::CONTENT_SECURITY_POLICY,
        "default-src 'self'; object-src 'none'",
    ),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
];

/// Build the HTTP router.
///
/// # Routes
///
/// - `GET /health`, `GET /`
/// - `POST /accounts`, `GET /accounts`
/// - `GET|PUT|DELETE /accounts/{id}`
///
/// Any other method on these paths gets a JSON 405; unknown paths get a JSON 404.
///
/// # Layers (outermost first)
///
/// 1. Request tracing
/// 2. CORS, allowing any origin
/// 3. Security headers
/// 4. HTTPS redirect, when `config.force_https` is set
pub fn build_router(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .route(
            "/health",
            get(health::health_check).fallback(handlers::method_not_allowed),
        )
        .route(
            "/",
            get(health::index).fallback(handlers::method_not_allowed),
        )
        .route(
            "/accounts",
            get(accounts::list_accounts)
                .post(accounts::create_account)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/accounts/{id}",
            get(accounts::get_account)
                .put(accounts::update_account)
                .delete(accounts::delete_account)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(axum_middleware::from_fn_with_state(
            ForceHttps(config.force_https),
            force_https,
        ));

    for (name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ));
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
