//! Auction House - A lightweight auction server
//!
//! Auctions stay active for a configured duration and are closed
//! automatically by a background sweep task once they expire.

pub mod api;
pub mod auction;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use auction::AuctionRepository;
pub use config::Config;
