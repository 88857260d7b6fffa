//! Wallet connectors
//!
//! A connector performs the network-facing half of a session operation.
//! The session store owns state; connectors only produce accounts and
//! balances. `MockWalletConnector` simulates a wallet SDK with fixed
//! latencies and generated accounts.

use async_trait::async_trait;
use parking_lot::Mutex;
use polygrand_core::WalletAccount;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, info};

use crate::address::{generate_account, perturb_balance};
use crate::config::WalletConfig;
use crate::types::{
    DEFAULT_BALANCE_DELAY, DEFAULT_CONNECT_DELAY, DEFAULT_DISCONNECT_DELAY, Result,
};

/// Network-facing side of a wallet session
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Run the connect handshake and return the selected account
    async fn connect(&self) -> Result<WalletAccount>;

    /// Tear down the connection for `account`
    async fn disconnect(&self, account: &WalletAccount) -> Result<()>;

    /// Current balance of `account`
    async fn fetch_balance(&self, account: &WalletAccount) -> Result<Decimal>;
}

/// Latencies the mock connector simulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDelays {
    pub connect: Duration,
    pub disconnect: Duration,
    pub balance: Duration,
}

impl MockDelays {
    /// No latency at all, for tests
    pub const fn instant() -> Self {
        Self {
            connect: Duration::ZERO,
            disconnect: Duration::ZERO,
            balance: Duration::ZERO,
        }
    }
}

impl Default for MockDelays {
    fn default() -> Self {
        Self {
            connect: DEFAULT_CONNECT_DELAY,
            disconnect: DEFAULT_DISCONNECT_DELAY,
            balance: DEFAULT_BALANCE_DELAY,
        }
    }
}

/// Simulated wallet: generated accounts, drifting balances, no chain access
pub struct MockWalletConnector {
    rng: Mutex<StdRng>,
    delays: MockDelays,
}

impl MockWalletConnector {
    /// Mock connector with the default latencies and an OS-seeded generator
    pub fn new() -> Self {
        Self::with_delays(MockDelays::default())
    }

    pub fn with_delays(delays: MockDelays) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
            delays,
        }
    }

    /// Deterministic mock connector
    pub fn seeded(seed: u64, delays: MockDelays) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            delays,
        }
    }

    /// Mock connector using the latencies from configuration
    pub fn from_config(config: &WalletConfig) -> Self {
        Self::with_delays(config.delays)
    }

    pub fn delays(&self) -> MockDelays {
        self.delays
    }
}

impl Default for MockWalletConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletConnector for MockWalletConnector {
    fn name(&self) -> &str {
        "mock"
    }

    async fn connect(&self) -> Result<WalletAccount> {
        tokio::time::sleep(self.delays.connect).await;

        let account = generate_account(&mut *self.rng.lock());
        info!(
            "Mock wallet connected: {} ({}, balance {:.2} ALGO)",
            account.address, account.name, account.balance
        );
        Ok(account)
    }

    async fn disconnect(&self, account: &WalletAccount) -> Result<()> {
        tokio::time::sleep(self.delays.disconnect).await;
        debug!("Mock wallet released {}", account.address);
        Ok(())
    }

    async fn fetch_balance(&self, account: &WalletAccount) -> Result<Decimal> {
        tokio::time::sleep(self.delays.balance).await;

        let balance = perturb_balance(&mut *self.rng.lock(), account.balance);
        debug!("Mock balance for {}: {:.2} ALGO", account.address, balance);
        Ok(balance)
    }
}
