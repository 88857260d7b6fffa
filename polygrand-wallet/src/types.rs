//! Shared types and constants for the wallet session

use std::time::Duration;

// ============================================================================
// Mock wallet parameters
// ============================================================================

/// Simulated latency of the connect handshake
pub const DEFAULT_CONNECT_DELAY: Duration = Duration::from_millis(1500);

/// Simulated latency of the disconnect teardown
pub const DEFAULT_DISCONNECT_DELAY: Duration = Duration::from_millis(300);

/// Simulated latency of a balance refresh
pub const DEFAULT_BALANCE_DELAY: Duration = Duration::from_millis(500);

/// Lowest balance a freshly connected mock account gets (inclusive)
pub const MIN_MOCK_BALANCE: i64 = 10;

/// Upper bound for a freshly connected mock account's balance (exclusive)
pub const MAX_MOCK_BALANCE: i64 = 1000;

/// Largest balance move of a single refresh, in cents (5.00 ALGO)
pub const MAX_BALANCE_DELTA_CENTS: i64 = 500;

/// Display names handed out to mock accounts
pub const WALLET_NAMES: [&str; 5] = [
    "Demo Wallet",
    "Test Account",
    "Trading Wallet",
    "Main Wallet",
    "Secondary Account",
];

// ============================================================================
// Error Types
// ============================================================================

/// Wallet session errors
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Failed to connect wallet: {0}")]
    Connect(String),

    #[error("Failed to disconnect wallet: {0}")]
    Disconnect(String),

    #[error("Failed to update balance: {0}")]
    Balance(String),

    #[error("Session storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Operation cancelled")]
    Cancelled,

    /// A newer session operation started before this one finished
    #[error("Superseded by a newer session operation")]
    Superseded,
}

pub type Result<T> = std::result::Result<T, WalletError>;
