//! Route definitions for the GetiCard HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, the body limit, and request logging.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let mut routes = Router::new()
        .merge(auth_routes())
        .merge(card_routes())
        .route("/segredo", get(handlers::protected::secret))
        .route("/health", get(handlers::health::health))
        .route("/uploads/{filename}", get(handlers::uploads::serve_upload));

    if state.config.api.debug_routes {
        routes = routes.route("/debug-dynamo", get(handlers::debug::dump_cards));
    }

    routes
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Account endpoints
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Card CRUD
fn card_routes() -> Router<AppState> {
    Router::new().route("/card", post(handlers::card::create_card)).route(
        "/card/{card_id}",
        get(handlers::card::get_card).put(handlers::card::update_card),
    )
}
