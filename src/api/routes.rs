//! API Routes
//!
//! Configures the Axum router with all auction server endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_auction_handler, get_auction_handler, health_handler, list_auctions_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /auctions` - Create an auction
/// - `GET /auctions` - List auctions with optional filters
/// - `GET /auctions/:id` - Retrieve an auction by id
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auctions", post(create_auction_handler).get(list_auctions_handler))
        .route("/auctions/:id", get(get_auction_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
