//! API Handlers
//!
//! HTTP request handlers for each auction server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::auction::{AuctionRepository, AuctionStatus};
use crate::error::Result;
use crate::models::{AuctionResponse, CreateAuctionRequest, HealthResponse, ListAuctionsQuery};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Auction repository with its background sweeper
    pub repository: Arc<AuctionRepository>,
}

impl AppState {
    /// Creates a new AppState around a running repository.
    pub fn new(repository: Arc<AuctionRepository>) -> Self {
        Self { repository }
    }
}

/// Handler for POST /auctions
///
/// Validates the fields, persists the auction, and registers its expiry
/// deadline.
pub async fn create_auction_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateAuctionRequest>,
) -> Result<(StatusCode, Json<AuctionResponse>)> {
    let auction = state
        .repository
        .create_auction(&req.product_name, &req.category, &req.description, &req.condition)
        .await?;

    Ok((StatusCode::CREATED, Json(AuctionResponse::from(auction))))
}

/// Handler for GET /auctions/:id
///
/// An auction past its deadline may still read as Active until the next
/// sweep pass; staleness is bounded by the sweep period.
pub async fn get_auction_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AuctionResponse>> {
    let auction = state.repository.find_by_id(&id).await?;
    Ok(Json(AuctionResponse::from(auction)))
}

/// Handler for GET /auctions
///
/// Supports `status`, `category`, and `product_name` query filters.
pub async fn list_auctions_handler(
    State(state): State<AppState>,
    Query(query): Query<ListAuctionsQuery>,
) -> Result<Json<Vec<AuctionResponse>>> {
    let status = match &query.status {
        Some(raw) => Some(raw.parse::<AuctionStatus>()?),
        None => None,
    };

    let auctions = state
        .repository
        .find_by(status, query.category.as_deref(), query.product_name.as_deref())
        .await?;

    Ok(Json(auctions.into_iter().map(AuctionResponse::from).collect()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
