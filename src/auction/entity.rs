//! Auction Entity Module
//!
//! Defines the auction domain record and its field validation rules.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auction::{MIN_CATEGORY_LENGTH, MIN_DESCRIPTION_LENGTH, MIN_PRODUCT_NAME_LENGTH};
use crate::error::{AuctionError, Result};

// == Auction Status ==
/// Lifecycle status of an auction.
///
/// Monotonic: once Completed, an auction never reverts to Active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Completed,
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionStatus::Active => write!(f, "active"),
            AuctionStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for AuctionStatus {
    type Err = AuctionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(AuctionStatus::Active),
            "completed" => Ok(AuctionStatus::Completed),
            other => Err(AuctionError::InvalidAuction(format!(
                "Unknown auction status: {}",
                other
            ))),
        }
    }
}

// == Product Condition ==
/// Condition of the product being auctioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

impl fmt::Display for ProductCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCondition::New => write!(f, "new"),
            ProductCondition::Used => write!(f, "used"),
            ProductCondition::Refurbished => write!(f, "refurbished"),
        }
    }
}

impl FromStr for ProductCondition {
    type Err = AuctionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(ProductCondition::New),
            "used" => Ok(ProductCondition::Used),
            "refurbished" => Ok(ProductCondition::Refurbished),
            other => Err(AuctionError::InvalidAuction(format!(
                "Invalid product condition: {}",
                other
            ))),
        }
    }
}

// == Auction ==
/// An auction record.
///
/// The identifier is assigned at creation and immutable; the creation
/// timestamp is the anchor for the expiry deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    /// Unique identifier (UUIDv4)
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

impl Auction {
    // == Constructor ==
    /// Creates a new Active auction, validating all fields first.
    ///
    /// # Validation Rules
    /// - product name must be at least 2 characters
    /// - category must be at least 3 characters
    /// - description must be at least 11 characters
    pub fn new(product_name: &str, category: &str, description: &str, condition: ProductCondition) -> Result<Self> {
        if product_name.len() < MIN_PRODUCT_NAME_LENGTH {
            return Err(AuctionError::InvalidAuction(format!(
                "Product name must be at least {} characters",
                MIN_PRODUCT_NAME_LENGTH
            )));
        }

        if category.len() < MIN_CATEGORY_LENGTH {
            return Err(AuctionError::InvalidAuction(format!(
                "Category must be at least {} characters",
                MIN_CATEGORY_LENGTH
            )));
        }

        if description.len() < MIN_DESCRIPTION_LENGTH {
            return Err(AuctionError::InvalidAuction(format!(
                "Description must be at least {} characters",
                MIN_DESCRIPTION_LENGTH
            )));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            product_name: product_name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            condition,
            status: AuctionStatus::Active,
            created_at: Utc::now(),
        })
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auction_creation() {
        let auction = Auction::new(
            "Mechanical keyboard",
            "electronics",
            "A well-kept mechanical keyboard",
            ProductCondition::Used,
        )
        .unwrap();

        assert_eq!(auction.status, AuctionStatus::Active);
        assert_eq!(auction.condition, ProductCondition::Used);
        assert!(!auction.id.is_empty());
    }

    #[test]
    fn test_auction_ids_are_unique() {
        let a = Auction::new("Lamp A", "home", "A perfectly fine lamp", ProductCondition::New).unwrap();
        let b = Auction::new("Lamp B", "home", "Another fine lamp ok", ProductCondition::New).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_product_name_too_short() {
        let result = Auction::new("x", "electronics", "A long enough description", ProductCondition::New);
        assert!(matches!(result, Err(AuctionError::InvalidAuction(_))));
    }

    #[test]
    fn test_category_too_short() {
        let result = Auction::new("Keyboard", "tv", "A long enough description", ProductCondition::New);
        assert!(matches!(result, Err(AuctionError::InvalidAuction(_))));
    }

    #[test]
    fn test_description_too_short() {
        let result = Auction::new("Keyboard", "electronics", "short", ProductCondition::New);
        assert!(matches!(result, Err(AuctionError::InvalidAuction(_))));
    }

    #[test]
    fn test_condition_from_str() {
        assert_eq!("new".parse::<ProductCondition>().unwrap(), ProductCondition::New);
        assert_eq!("Used".parse::<ProductCondition>().unwrap(), ProductCondition::Used);
        assert_eq!(
            "refurbished".parse::<ProductCondition>().unwrap(),
            ProductCondition::Refurbished
        );
        assert!("broken".parse::<ProductCondition>().is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("active".parse::<AuctionStatus>().unwrap(), AuctionStatus::Active);
        assert_eq!("completed".parse::<AuctionStatus>().unwrap(), AuctionStatus::Completed);
        assert!("pending".parse::<AuctionStatus>().is_err());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&AuctionStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let json = serde_json::to_string(&ProductCondition::Refurbished).unwrap();
        assert_eq!(json, "\"refurbished\"");
    }
}
