//! Auction Module
//!
//! Domain entity, in-memory expiry tracking, and the repository that ties
//! persistence and expiry together.

mod entity;
mod repository;
mod tracker;


// Re-export public types
pub use entity::{Auction, AuctionStatus, ProductCondition};
pub use repository::AuctionRepository;
pub use tracker::ExpiryTracker;

// == Public Constants ==
/// Minimum product name length in bytes
pub const MIN_PRODUCT_NAME_LENGTH: usize = 2;

/// Minimum category length in bytes
pub const MIN_CATEGORY_LENGTH: usize = 3;

/// Minimum description length in bytes
pub const MIN_DESCRIPTION_LENGTH: usize = 11;
