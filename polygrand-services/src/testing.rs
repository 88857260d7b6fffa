//! In-process stand-in for the backend API

use async_trait::async_trait;
use parking_lot::Mutex;
use polygrand_client::MarketApi;
use polygrand_core::{
    CreateMarketRequest, LeaderboardEntry, Market, PlatformStats, PolygrandError,
    PolygrandResult, TradeRequest, UserPosition, UserTrade,
};
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Default)]
pub struct FakeApi {
    markets: Mutex<Vec<Value>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failures: Mutex<HashMap<&'static str, usize>>,
    trade_rejection: Mutex<Option<(u16, String)>>,
    trades: Mutex<Vec<(String, TradeRequest)>>,
}

impl FakeApi {
    /// Backend serving these raw market records
    pub fn with_markets(markets: Vec<Value>) -> Self {
        Self {
            markets: Mutex::new(markets),
            ..Self::default()
        }
    }

    /// Make the next `times` calls to `method` fail with a network error
    pub fn fail_next(&self, method: &'static str, times: usize) {
        self.failures.lock().insert(method, times);
    }

    pub fn reject_trades(&self, status: u16, detail: &str) {
        *self.trade_rejection.lock() = Some((status, detail.to_string()));
    }

    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().get(method).copied().unwrap_or(0)
    }

    pub fn trades(&self) -> Vec<(String, TradeRequest)> {
        self.trades.lock().clone()
    }

    fn record(&self, method: &'static str) -> PolygrandResult<()> {
        *self.calls.lock().entry(method).or_default() += 1;

        let mut failures = self.failures.lock();
        match failures.get_mut(method) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                Err(PolygrandError::network("connection refused"))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl MarketApi for FakeApi {
    async fn get_markets(&self) -> PolygrandResult<Vec<Market>> {
        self.record("get_markets")?;
        Ok(Market::list_from_backend(&Value::Array(self.markets.lock().clone())))
    }

    async fn get_market(&self, id: &str) -> PolygrandResult<Market> {
        self.record("get_market")?;
        self.markets
            .lock()
            .iter()
            .find(|m| m["id"] == id)
            .map(Market::from_backend)
            .ok_or_else(|| PolygrandError::rejected(404, "Market not found"))
    }

    async fn create_market(&self, request: &CreateMarketRequest) -> PolygrandResult<Market> {
        self.record("create_market")?;
        let id = format!("market_{}", self.markets.lock().len() + 1);
        let record = json!({
            "id": id,
            "question": request.question,
            "description": request.description,
            "category": request.category,
            "outcomes": request.outcomes,
            "end_time": request.end_time,
            "creator_address": request.creator_address,
            "status": "active"
        });
        self.markets.lock().push(record.clone());
        Ok(Market::from_backend(&record))
    }

    async fn execute_trade(&self, market_id: &str, request: &TradeRequest) -> PolygrandResult<Value> {
        self.record("execute_trade")?;
        if let Some((status, detail)) = self.trade_rejection.lock().clone() {
            return Err(PolygrandError::rejected(status, detail));
        }
        self.trades
            .lock()
            .push((market_id.to_string(), request.clone()));
        Ok(json!({"success": true, "market_id": market_id}))
    }

    async fn get_user_positions(&self, _address: &str) -> PolygrandResult<Vec<UserPosition>> {
        self.record("get_user_positions")?;
        Ok(Vec::new())
    }

    async fn get_user_trades(&self, _address: &str) -> PolygrandResult<Vec<UserTrade>> {
        self.record("get_user_trades")?;
        Ok(Vec::new())
    }

    async fn get_platform_stats(&self) -> PolygrandResult<PlatformStats> {
        self.record("get_platform_stats")?;
        Ok(PlatformStats {
            total_markets: self.markets.lock().len() as u64,
            ..PlatformStats::default()
        })
    }

    async fn get_leaderboard(&self) -> PolygrandResult<Vec<LeaderboardEntry>> {
        self.record("get_leaderboard")?;
        Ok(Vec::new())
    }
}
