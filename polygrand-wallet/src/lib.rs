//! PolyGrand Wallet - Wallet Session Store
//!
//! This crate provides:
//! - The wallet session state machine (connect, disconnect, balance refresh)
//! - Wallet connectors, including a mock that simulates a wallet SDK
//! - Session persistence across restarts (SQLite or in-memory)
//! - Configuration from the environment

pub mod address;
pub mod config;
pub mod connector;
pub mod repository;
pub mod session;
pub mod types;

pub use config::WalletConfig;
pub use connector::{MockDelays, MockWalletConnector, WalletConnector};
pub use repository::{MemorySessionRepository, SessionRepository, SqliteSessionRepository};
pub use session::{CancelSignal, WalletSession, cancellation};
pub use types::*;
