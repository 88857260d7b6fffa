//! Platform statistics and leaderboard types

use crate::backend::{decimal_from_value, u64_from_value};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Platform-wide statistics shown on the home page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_markets: u64,
    pub total_volume: Decimal,
    pub active_users: u64,
    pub resolved_markets: u64,
}

impl PlatformStats {
    /// Read stats from a `/stats/platform` response; missing fields are zero
    pub fn from_backend(value: &Value) -> Self {
        let field = |key: &str| value.get(key);

        Self {
            total_markets: field("total_markets").and_then(u64_from_value).unwrap_or(0),
            total_volume: field("total_volume")
                .and_then(decimal_from_value)
                .unwrap_or(Decimal::ZERO),
            active_users: field("total_traders").and_then(u64_from_value).unwrap_or(0),
            resolved_markets: field("resolved_markets").and_then(u64_from_value).unwrap_or(0),
        }
    }

    /// Markets that are not resolved yet
    pub fn active_markets(&self) -> u64 {
        self.total_markets.saturating_sub(self.resolved_markets)
    }
}

/// One row of the trader leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub rank: u32,
    pub address: String,
    #[serde(default)]
    pub total_profit: Decimal,
    #[serde(default)]
    pub total_trades: u64,
    #[serde(default)]
    pub win_rate: Decimal,
    #[serde(default)]
    pub reputation_score: Decimal,
}
