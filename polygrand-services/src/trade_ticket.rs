//! Trade ticket
//!
//! The order form on a market page. Input is validated locally before
//! anything is sent; a failed submission becomes a single alert message and
//! leaves local state untouched (nothing is applied optimistically).

use polygrand_core::market::{OUTCOME_A, OUTCOME_B};
use polygrand_core::{Market, PolygrandError, TradeRequest, WalletAccount};
use polygrand_wallet::WalletSession;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

use crate::format::{algo_to_micro, outcome_percents};
use crate::market_service::MarketService;
use crate::views::estimated_payout;

/// Alert shown after a successful trade
pub const TRADE_SUCCESS: &str = "Trade executed successfully!";

/// Alert shown when the backend gives no reason for a failure
pub const TRADE_FAILED: &str = "Trade failed. Please try again.";

/// Why a trade was not placed. `Display` is the alert text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("Please connect your wallet")]
    WalletNotConnected,

    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("This market has been resolved")]
    MarketResolved,

    #[error("{0}")]
    Rejected(String),
}

impl TicketError {
    /// Alert for a failed submission: the backend's reason, or a generic retry hint
    pub fn from_submission(error: &PolygrandError) -> Self {
        TicketError::Rejected(
            error
                .backend_detail()
                .map(str::to_string)
                .unwrap_or_else(|| TRADE_FAILED.to_string()),
        )
    }
}

/// Projected result of the current ticket, in ALGO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeEstimate {
    pub payout: Decimal,
    pub profit: Decimal,
}

/// Order form state for one market
#[derive(Debug, Clone)]
pub struct TradeTicket {
    market: Market,
    outcome: u8,
    amount: String,
    pending: bool,
}

impl TradeTicket {
    pub fn new(market: Market) -> Self {
        Self {
            market,
            outcome: OUTCOME_A,
            amount: String::new(),
            pending: false,
        }
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    /// Select outcome A (0) or B (1). Anything else is ignored.
    pub fn select_outcome(&mut self, outcome: u8) {
        if outcome == OUTCOME_A || outcome == OUTCOME_B {
            self.outcome = outcome;
        }
    }

    pub fn selected_outcome(&self) -> u8 {
        self.outcome
    }

    pub fn selected_outcome_name(&self) -> &str {
        self.market.outcome_name(self.outcome)
    }

    /// Raw amount as typed, in ALGO
    pub fn set_amount(&mut self, input: impl Into<String>) {
        self.amount = input.into();
    }

    pub fn amount_input(&self) -> &str {
        &self.amount
    }

    /// The typed amount if it is a positive number
    pub fn amount(&self) -> Option<Decimal> {
        let raw = self.amount.trim();
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .ok()
            .filter(|amount| *amount > Decimal::ZERO)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        !self.pending && self.amount().is_some()
    }

    pub fn estimate(&self) -> Option<TradeEstimate> {
        let amount = self.amount()?;
        let (a, b) = outcome_percents(&self.market);
        let percent = if self.outcome == OUTCOME_A { a } else { b };

        let payout = estimated_payout(amount, percent)?;
        Some(TradeEstimate {
            payout,
            profit: payout - amount,
        })
    }

    /// Validate against `account` and build the request the backend expects.
    ///
    /// The amount is sent in whole microAlgos.
    pub fn prepare(&self, account: Option<&WalletAccount>) -> Result<TradeRequest, TicketError> {
        let account = account.ok_or(TicketError::WalletNotConnected)?;
        if self.market.is_resolved {
            return Err(TicketError::MarketResolved);
        }

        let amount = self.amount().ok_or(TicketError::InvalidAmount)?;
        // Amounts below one microAlgo would reach the backend as zero.
        let micro = algo_to_micro(amount)
            .filter(|micro| *micro > Decimal::ZERO)
            .ok_or(TicketError::InvalidAmount)?;
        if amount > account.balance {
            return Err(TicketError::InsufficientBalance);
        }

        Ok(TradeRequest {
            trader_address: account.address.clone(),
            outcome: self.selected_outcome_name().to_string(),
            amount: micro,
        })
    }

    /// Validate and submit. The amount is cleared only on success.
    pub async fn submit(
        &mut self,
        service: &MarketService,
        session: &WalletSession,
    ) -> Result<Value, TicketError> {
        let account = if session.is_connected() {
            session.account()
        } else {
            None
        };
        let request = self.prepare(account.as_ref())?;

        self.pending = true;
        let result = service.execute_trade(&self.market.id, &request).await;
        self.pending = false;

        match result {
            Ok(receipt) => {
                info!(
                    "{} ALGO on \"{}\" placed for market {}",
                    self.amount.trim(),
                    request.outcome,
                    self.market.id
                );
                self.amount.clear();
                Ok(receipt)
            }
            Err(e) => {
                warn!("Trade failed: {}", e);
                Err(TicketError::from_submission(&e))
            }
        }
    }
}
