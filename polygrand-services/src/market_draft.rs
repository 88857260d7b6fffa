//! Create-market form

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use polygrand_core::{CreateMarketRequest, Market, PolygrandError, WalletAccount};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

use crate::format::algo_to_micro;
use crate::market_service::MarketService;

pub const MIN_OUTCOMES: usize = 2;
pub const MAX_OUTCOMES: usize = 10;

/// Balance needed to deploy a market (1 ALGO for the contract plus fees)
pub const MIN_CREATOR_BALANCE: Decimal = Decimal::from_parts(11, 0, 0, false, 1);

pub const DEFAULT_CATEGORY: &str = "politics";

/// Initial liquidity offered by default, in ALGO
pub const DEFAULT_LIQUIDITY: &str = "100";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please connect your wallet first")]
    WalletNotConnected,

    #[error("Please enter a market title")]
    MissingTitle,

    #[error("Please provide at least 2 outcomes")]
    TooFewOutcomes,

    #[error("Please choose a valid resolution date")]
    InvalidResolutionDate,

    #[error("Please enter a valid initial liquidity")]
    InvalidLiquidity,

    #[error("You need at least {minimum} ALGO to create a market. Current balance: {balance} ALGO")]
    InsufficientBalance { minimum: Decimal, balance: String },

    #[error("{0}")]
    Rejected(String),
}

/// Form state for a new market
#[derive(Debug, Clone)]
pub struct MarketDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Either a full RFC 3339 timestamp or a `YYYY-MM-DD[THH:MM]` local input
    pub resolution_date: String,
    pub initial_liquidity: String,
    outcomes: Vec<String>,
}

impl Default for MarketDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            resolution_date: String::new(),
            initial_liquidity: DEFAULT_LIQUIDITY.to_string(),
            outcomes: vec![String::new(); MIN_OUTCOMES],
        }
    }
}

impl MarketDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    /// Add an empty outcome row; returns false at the limit
    pub fn add_outcome(&mut self) -> bool {
        if self.outcomes.len() >= MAX_OUTCOMES {
            return false;
        }
        self.outcomes.push(String::new());
        true
    }

    /// Remove an outcome row; the form always keeps two
    pub fn remove_outcome(&mut self, index: usize) -> bool {
        if self.outcomes.len() <= MIN_OUTCOMES || index >= self.outcomes.len() {
            return false;
        }
        self.outcomes.remove(index);
        true
    }

    pub fn set_outcome(&mut self, index: usize, name: impl Into<String>) {
        if let Some(slot) = self.outcomes.get_mut(index) {
            *slot = name.into();
        }
    }

    /// Whether `account` can afford to create a market at all
    pub fn can_create(account: &WalletAccount) -> bool {
        account.balance >= MIN_CREATOR_BALANCE
    }

    /// Validate and build the request. Blank outcome rows are dropped.
    pub fn prepare(&self, account: Option<&WalletAccount>) -> Result<CreateMarketRequest, DraftError> {
        let account = account.ok_or(DraftError::WalletNotConnected)?;
        if !Self::can_create(account) {
            return Err(DraftError::InsufficientBalance {
                minimum: MIN_CREATOR_BALANCE,
                balance: crate::format::fixed(account.balance, 2),
            });
        }

        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }

        let outcomes: Vec<String> = self
            .outcomes
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        if outcomes.len() < MIN_OUTCOMES {
            return Err(DraftError::TooFewOutcomes);
        }

        let end_time = parse_resolution_date(&self.resolution_date)
            .ok_or(DraftError::InvalidResolutionDate)?;

        let liquidity = Decimal::from_str(self.initial_liquidity.trim())
            .ok()
            .filter(|l| *l >= Decimal::ZERO)
            .ok_or(DraftError::InvalidLiquidity)?;
        let liquidity = algo_to_micro(liquidity).ok_or(DraftError::InvalidLiquidity)?;

        Ok(CreateMarketRequest {
            question: title.to_string(),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            outcomes,
            end_time: end_time.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            resolution_source: String::new(),
            initial_liquidity: liquidity,
            creator_address: account.address.clone(),
        })
    }

    /// Validate and create the market
    pub async fn submit(
        &self,
        service: &MarketService,
        account: Option<&WalletAccount>,
    ) -> Result<Market, DraftError> {
        let request = self.prepare(account)?;
        service.create_market(&request).await.map_err(|e: PolygrandError| {
            warn!("Market creation failed: {}", e);
            DraftError::Rejected(
                e.backend_detail()
                    .unwrap_or("Failed to create market. Please try again.")
                    .to_string(),
            )
        })
    }
}

fn parse_resolution_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
