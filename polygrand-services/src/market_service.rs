//! Market service
//!
//! Front door for every backend read and write the pages make. Reads go
//! through the query layer (one retry, cached per key); writes go straight
//! to the API and invalidate the cached reads they affect.

use polygrand_client::MarketApi;
use polygrand_core::{
    CreateMarketRequest, LeaderboardEntry, Market, PlatformStats, PolygrandResult, TradeRequest,
    UserPosition, UserTrade,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::query::{fetch_query, QueryCache, QueryOptions, QueryState, DEFAULT_STALE_TIME};

// ============================================================================
// Query keys
// ============================================================================

pub const MARKETS_KEY: &str = "markets";
pub const STATS_KEY: &str = "stats";
pub const LEADERBOARD_KEY: &str = "leaderboard";

fn market_key(id: &str) -> String {
    format!("{}/{}", MARKETS_KEY, id)
}

fn positions_key(address: &str) -> String {
    format!("positions/{}", address)
}

fn trades_key(address: &str) -> String {
    format!("trades/{}", address)
}

/// Service for reading and trading markets
pub struct MarketService {
    api: Arc<dyn MarketApi>,
    cache: QueryCache,
    options: QueryOptions,
}

impl MarketService {
    /// Service with one retry and the default stale window
    pub fn new(api: Arc<dyn MarketApi>) -> Self {
        Self::with_options(api, QueryOptions::default(), DEFAULT_STALE_TIME)
    }

    pub fn with_options(api: Arc<dyn MarketApi>, options: QueryOptions, stale_time: Duration) -> Self {
        Self {
            api,
            cache: QueryCache::new(stale_time),
            options,
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    // ========================================================================
    // Reads
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn markets(&self) -> QueryState<Vec<Market>> {
        self.cached(MARKETS_KEY, || self.api.get_markets()).await
    }

    #[instrument(skip(self))]
    pub async fn market(&self, id: &str) -> QueryState<Market> {
        self.cached(&market_key(id), || self.api.get_market(id)).await
    }

    #[instrument(skip(self))]
    pub async fn platform_stats(&self) -> QueryState<PlatformStats> {
        self.cached(STATS_KEY, || self.api.get_platform_stats()).await
    }

    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> QueryState<Vec<LeaderboardEntry>> {
        self.cached(LEADERBOARD_KEY, || self.api.get_leaderboard()).await
    }

    #[instrument(skip(self))]
    pub async fn positions(&self, address: &str) -> QueryState<Vec<UserPosition>> {
        self.cached(&positions_key(address), || self.api.get_user_positions(address))
            .await
    }

    #[instrument(skip(self))]
    pub async fn history(&self, address: &str) -> QueryState<Vec<UserTrade>> {
        self.cached(&trades_key(address), || self.api.get_user_trades(address))
            .await
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Submit a trade; on success the market list, the market and the
    /// trader's holdings are refetched on next read
    #[instrument(skip(self, request), fields(trader = %request.trader_address))]
    pub async fn execute_trade(&self, market_id: &str, request: &TradeRequest) -> PolygrandResult<Value> {
        let receipt = self.api.execute_trade(market_id, request).await?;

        self.cache.invalidate(MARKETS_KEY);
        self.cache.invalidate(&positions_key(&request.trader_address));
        self.cache.invalidate(&trades_key(&request.trader_address));
        info!("Trade on {} executed for {}", market_id, request.trader_address);
        Ok(receipt)
    }

    #[instrument(skip(self, request))]
    pub async fn create_market(&self, request: &CreateMarketRequest) -> PolygrandResult<Market> {
        let market = self.api.create_market(request).await?;

        self.cache.invalidate(MARKETS_KEY);
        self.cache.invalidate(STATS_KEY);
        info!("Market {} created by {}", market.id, request.creator_address);
        Ok(market)
    }

    /// Drop cached results under `key`
    pub fn invalidate(&self, key: &str) {
        self.cache.invalidate(key);
    }

    async fn cached<T, F, Fut>(&self, key: &str, fetch: F) -> QueryState<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut() -> Fut,
        Fut: Future<Output = PolygrandResult<T>>,
    {
        if let Some(hit) = self.cache.get::<T>(key) {
            debug!("Serving {} from cache", key);
            return QueryState::Data(hit);
        }

        let state = fetch_query(key, self.options, fetch).await;
        if let QueryState::Data(value) = &state {
            self.cache.insert(key, value);
        }
        state
    }
}
