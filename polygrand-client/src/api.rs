//! Market service port
//!
//! Everything above the HTTP layer talks to the backend through this trait,
//! so the service layer can run against `ApiClient` or an in-process fake.

use async_trait::async_trait;
use polygrand_core::{
    CreateMarketRequest, LeaderboardEntry, Market, PlatformStats, PolygrandResult, TradeRequest,
    UserPosition, UserTrade,
};
use serde_json::Value;

#[async_trait]
pub trait MarketApi: Send + Sync {
    /// All markets, already transformed into view models
    async fn get_markets(&self) -> PolygrandResult<Vec<Market>>;

    async fn get_market(&self, id: &str) -> PolygrandResult<Market>;

    /// Create a market and return it as the backend stored it
    async fn create_market(&self, request: &CreateMarketRequest) -> PolygrandResult<Market>;

    /// Submit a trade. The receipt is passed through untouched.
    async fn execute_trade(&self, market_id: &str, request: &TradeRequest) -> PolygrandResult<Value>;

    async fn get_user_positions(&self, address: &str) -> PolygrandResult<Vec<UserPosition>>;

    async fn get_user_trades(&self, address: &str) -> PolygrandResult<Vec<UserTrade>>;

    async fn get_platform_stats(&self) -> PolygrandResult<PlatformStats>;

    async fn get_leaderboard(&self) -> PolygrandResult<Vec<LeaderboardEntry>>;
}
