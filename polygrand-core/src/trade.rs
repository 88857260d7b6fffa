//! Trading request and user history types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /markets/:id/trade`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub trader_address: String,
    /// Outcome label being bought
    pub outcome: String,
    /// Amount in microAlgos
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Body of `POST /markets/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMarketRequest {
    pub question: String,
    pub description: String,
    pub category: String,
    pub outcomes: Vec<String>,
    /// ISO 8601 end time
    pub end_time: String,
    pub resolution_source: String,
    /// Liquidity in microAlgos
    #[serde(with = "rust_decimal::serde::float")]
    pub initial_liquidity: Decimal,
    pub creator_address: String,
}

/// A past trade from `GET /user/:address/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrade {
    pub id: String,
    pub market_id: String,
    pub trader_address: String,
    pub outcome: String,
    pub amount: Decimal,
    #[serde(default)]
    pub shares: Decimal,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub txn_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Holdings in one market from `GET /user/:address/positions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPosition {
    pub market_id: String,
    #[serde(default)]
    pub user_address: String,
    #[serde(default, alias = "outcomeABalance")]
    pub outcome_a_balance: Decimal,
    #[serde(default, alias = "outcomeBBalance")]
    pub outcome_b_balance: Decimal,
}

impl UserPosition {
    /// Whether the user holds anything in this market
    pub fn is_open(&self) -> bool {
        !self.outcome_a_balance.is_zero() || !self.outcome_b_balance.is_zero()
    }
}
