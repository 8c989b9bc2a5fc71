/// HTTP router assembly
use crate::{api, state::AppState};
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router around the given state
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(api::health::root))
        .route("/api/health", get(api::health::health))
        .nest("/api/user", api::users::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
