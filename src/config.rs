//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long an auction stays active, in seconds
    pub auction_duration_secs: u64,
    /// Interval between expiry sweep passes, in seconds
    pub sweep_interval_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Values that are absent or unparsable fall back to the default.
    ///
    /// # Environment Variables
    /// - `AUCTION_DURATION` - Auction active duration in seconds (default: 300)
    /// - `SWEEP_INTERVAL` - Sweep pass interval in seconds (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            auction_duration_secs: env::var("AUCTION_DURATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sweep_interval_secs: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Active duration added to an auction's creation time to get its deadline.
    pub fn auction_duration(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.auction_duration_secs as i64)
    }

    /// Period between sweep passes.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auction_duration_secs: 300,
            sweep_interval_secs: 5,
            server_port: 3000,
        }
    }
}
