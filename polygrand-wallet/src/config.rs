//! Wallet session configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::connector::MockDelays;
use crate::types::{Result, WalletError};

/// Default location of the session database
pub const DEFAULT_WALLET_DB: &str = "data/wallet.db";

/// Configuration for the wallet session store
#[derive(Debug, Clone, PartialEq)]
pub struct WalletConfig {
    /// SQLite file holding the persisted session
    pub db_path: PathBuf,
    /// Latencies the mock connector simulates
    pub delays: MockDelays,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_WALLET_DB),
            delays: MockDelays::default(),
        }
    }
}

impl WalletConfig {
    /// Load configuration from the environment (and `.env.local` if present)
    ///
    /// Reads:
    /// - POLYGRAND_WALLET_DB
    /// - POLYGRAND_WALLET_CONNECT_DELAY_MS
    /// - POLYGRAND_WALLET_DISCONNECT_DELAY_MS
    /// - POLYGRAND_WALLET_BALANCE_DELAY_MS
    pub fn from_env() -> Result<Self> {
        dotenvy::from_filename(".env.local").ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let db_path = lookup("POLYGRAND_WALLET_DB")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let delays = MockDelays {
            connect: delay_var(&lookup, "POLYGRAND_WALLET_CONNECT_DELAY_MS")?
                .unwrap_or(defaults.delays.connect),
            disconnect: delay_var(&lookup, "POLYGRAND_WALLET_DISCONNECT_DELAY_MS")?
                .unwrap_or(defaults.delays.disconnect),
            balance: delay_var(&lookup, "POLYGRAND_WALLET_BALANCE_DELAY_MS")?
                .unwrap_or(defaults.delays.balance),
        };

        Ok(Self { db_path, delays })
    }
}

fn delay_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|e| WalletError::Config(format!("{} must be milliseconds: {}", key, e))),
        None => Ok(None),
    }
}
