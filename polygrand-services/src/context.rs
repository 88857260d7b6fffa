//! Application context
//!
//! Owns the wallet session and the market service for the lifetime of the
//! client and assembles page view models from them. Build one at startup
//! and share it; there is no global instance.

use anyhow::Context;
use chrono::{DateTime, Utc};
use polygrand_client::{ApiClient, ClientConfig};
use polygrand_core::WalletAccount;
use polygrand_wallet::{WalletConfig, WalletSession};
use std::sync::Arc;
use tracing::info;

use crate::market_service::MarketService;
use crate::query::QueryState;
use crate::views::{HomeView, MarketDetailView, MarketsView, ProfileView, StatusFilter};

#[derive(Clone)]
pub struct AppContext {
    wallet: Arc<WalletSession>,
    markets: Arc<MarketService>,
}

impl AppContext {
    pub fn new(wallet: Arc<WalletSession>, markets: Arc<MarketService>) -> Self {
        Self { wallet, markets }
    }

    /// Wire the HTTP client, mock wallet and session storage from the environment
    pub fn from_env() -> anyhow::Result<Self> {
        let client_config = ClientConfig::from_env().context("Invalid API client configuration")?;
        let wallet_config = WalletConfig::from_env().context("Invalid wallet configuration")?;

        let api = ApiClient::new(&client_config).context("Failed to create API client")?;
        let wallet = WalletSession::from_config(&wallet_config)
            .with_context(|| format!("Failed to open {}", wallet_config.db_path.display()))?;

        Ok(Self::new(
            Arc::new(wallet),
            Arc::new(MarketService::new(Arc::new(api))),
        ))
    }

    pub fn wallet(&self) -> &Arc<WalletSession> {
        &self.wallet
    }

    pub fn markets(&self) -> &Arc<MarketService> {
        &self.markets
    }

    /// Startup: initialize the wallet and pick up a saved session
    pub fn start(&self) -> Option<WalletAccount> {
        self.wallet.initialize_wallet();
        let restored = self.wallet.reconnect_session();
        info!(
            "PolyGrand client started ({})",
            if restored.is_some() { "session restored" } else { "no wallet" }
        );
        restored
    }

    fn connected_account(&self) -> Option<WalletAccount> {
        if self.wallet.is_connected() {
            self.wallet.account()
        } else {
            None
        }
    }

    // ========================================================================
    // Pages
    // ========================================================================

    pub async fn home(&self, now: DateTime<Utc>) -> HomeView {
        let (markets, stats) = tokio::join!(self.markets.markets(), self.markets.platform_stats());
        HomeView::new(&markets, &stats, now)
    }

    pub async fn markets_page(&self, search: &str, filter: StatusFilter, now: DateTime<Utc>) -> MarketsView {
        let markets = self.markets.markets().await;
        MarketsView::new(&markets, search, filter, now)
    }

    pub async fn market_page(&self, id: &str, now: DateTime<Utc>) -> MarketDetailView {
        let market = self.markets.market(id).await;
        MarketDetailView::new(&market, self.connected_account().as_ref(), now)
    }

    /// Positions and history are only fetched for a connected wallet
    pub async fn profile(&self, now: DateTime<Utc>) -> ProfileView {
        let account = self.connected_account();
        let (positions, trades) = match &account {
            Some(account) => {
                tokio::join!(
                    self.markets.positions(&account.address),
                    self.markets.history(&account.address)
                )
            }
            None => (QueryState::Loading, QueryState::Loading),
        };
        ProfileView::new(account.as_ref(), &positions, &trades, now)
    }
}
