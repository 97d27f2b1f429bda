//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry Sweep: closes auctions whose deadline has passed

mod sweeper;

pub use sweeper::{sweep_expired, AuctionSweeper, CloseAuction, StoreCloser, SweepOutcome};
