//! API Module
//!
//! HTTP handlers and routing for the auction server REST API.
//!
//! # Endpoints
//! - `POST /auctions` - Create an auction
//! - `GET /auctions/:id` - Retrieve an auction by id
//! - `GET /auctions` - List auctions with optional filters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
