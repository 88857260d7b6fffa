//! Core types for the PolyGrand prediction market client
//!
//! This crate defines the shared data structures used across the workspace:
//! the market view model and the backend schema it is built from, wallet
//! session types, and platform statistics.

pub mod backend;
pub mod error;
pub mod market;
pub mod stats;
pub mod trade;
pub mod wallet;

pub use backend::BackendMarket;
pub use error::{PolygrandError, PolygrandResult};
pub use market::{Market, MarketField, TransformReport};
pub use stats::{LeaderboardEntry, PlatformStats};
pub use trade::{CreateMarketRequest, TradeRequest, UserPosition, UserTrade};
pub use wallet::{
    PersistedEnvelope, PersistedSession, SessionPhase, WalletAccount, WalletSessionState,
};
