//! Error types for the auction server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Auction Error Enum ==
/// Unified error type for the auction server.
#[derive(Error, Debug)]
pub enum AuctionError {
    /// Auction not found in the store
    #[error("Auction not found: {0}")]
    NotFound(String),

    /// Invalid auction data rejected before any state mutation
    #[error("Invalid auction: {0}")]
    InvalidAuction(String),

    /// Durable store operation failed
    #[error("Store error: {0}")]
    Store(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AuctionError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuctionError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AuctionError::InvalidAuction(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AuctionError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AuctionError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the auction server.
pub type Result<T> = std::result::Result<T, AuctionError>;
