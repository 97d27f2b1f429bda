//! Response DTOs for the auction server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auction::{Auction, AuctionStatus, ProductCondition};

/// Response body for auction endpoints
#[derive(Debug, Clone, Serialize)]
pub struct AuctionResponse {
    /// Auction identifier
    pub id: String,
    /// Name of the product being auctioned
    pub product_name: String,
    /// Product category
    pub category: String,
    /// Product description
    pub description: String,
    /// Product condition
    pub condition: ProductCondition,
    /// Current lifecycle status
    pub status: AuctionStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Auction> for AuctionResponse {
    fn from(auction: Auction) -> Self {
        Self {
            id: auction.id,
            product_name: auction.product_name,
            category: auction.category,
            description: auction.description,
            condition: auction.condition,
            status: auction.status,
            created_at: auction.created_at,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auction_response_serialize() {
        let auction = Auction::new(
            "Keyboard",
            "electronics",
            "A mechanical keyboard",
            ProductCondition::Used,
        )
        .unwrap();
        let response = AuctionResponse::from(auction.clone());

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(&auction.id));
        assert!(json.contains("\"status\":\"active\""));
        assert!(json.contains("\"condition\":\"used\""));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
