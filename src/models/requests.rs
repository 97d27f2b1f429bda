//! Request DTOs for the auction server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Request body for creating an auction (POST /auctions)
///
/// Field validation (name/category/description length, condition value)
/// happens in the auction core, not here; the condition is carried as a
/// string and parsed there.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuctionRequest {
    /// Name of the product being auctioned
    pub product_name: String,
    /// Product category
    pub category: String,
    /// Product description
    pub description: String,
    /// Product condition: "new", "used", or "refurbished"
    pub condition: String,
}

/// Query parameters for listing auctions (GET /auctions)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAuctionsQuery {
    /// Filter by lifecycle status: "active" or "completed"
    #[serde(default)]
    pub status: Option<String>,
    /// Filter by exact category
    #[serde(default)]
    pub category: Option<String>,
    /// Filter by product name substring (case-insensitive)
    #[serde(default)]
    pub product_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"product_name":"Keyboard","category":"electronics","description":"A mechanical keyboard","condition":"used"}"#;
        let req: CreateAuctionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.product_name, "Keyboard");
        assert_eq!(req.category, "electronics");
        assert_eq!(req.condition, "used");
    }

    #[test]
    fn test_create_request_missing_field() {
        let json = r#"{"product_name":"Keyboard","category":"electronics"}"#;
        let result: Result<CreateAuctionRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_query_defaults() {
        let query: ListAuctionsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.status.is_none());
        assert!(query.category.is_none());
        assert!(query.product_name.is_none());
    }
}
