//! Wallet session types
//!
//! The session store itself lives in `polygrand-wallet`; these are the
//! shapes it owns and publishes to observers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key the persisted session lives under
pub const WALLET_STORAGE_KEY: &str = "polygrand-wallet-storage";

/// Version of the persisted envelope format
pub const WALLET_STORAGE_VERSION: u32 = 0;

/// Symbols a wallet address is drawn from (RFC 4648 base-32)
pub const ADDRESS_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Length of a wallet address
pub const ADDRESS_LENGTH: usize = 58;

/// A connected wallet account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    /// Opaque account address
    pub address: String,
    /// Balance in display units (ALGO)
    pub balance: Decimal,
    /// Display label
    #[serde(default)]
    pub name: String,
}

impl WalletAccount {
    /// Whether the address has the expected length and alphabet
    pub fn has_valid_address(&self) -> bool {
        self.address.len() == ADDRESS_LENGTH
            && self.address.bytes().all(|b| ADDRESS_ALPHABET.contains(&b))
    }

    /// Shortened address for compact display: first 10 and last 8 characters
    pub fn short_address(&self) -> String {
        let chars: Vec<char> = self.address.chars().collect();
        if chars.len() <= 18 {
            return self.address.clone();
        }
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 8..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

/// Coarse phase of the wallet session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Disconnected,
    /// Connect handshake in progress (selection modal open)
    Connecting,
    Connected,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::Disconnected => "disconnected",
            SessionPhase::Connecting => "connecting",
            SessionPhase::Connected => "connected",
        };
        write!(f, "{}", name)
    }
}

/// Full wallet session state as observed by the UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSessionState {
    pub account: Option<WalletAccount>,
    /// Always equal to `account.is_some()`
    pub is_connected: bool,
    /// True only while a connect handshake is running
    pub is_connecting: bool,
    pub error: Option<String>,
    pub modal_visible: bool,
}

impl WalletSessionState {
    /// Rebuild a session from its persisted subset.
    ///
    /// The connected flag and the account must agree; a record where they
    /// don't is treated as no session at all.
    pub fn from_persisted(persisted: PersistedSession) -> Self {
        match persisted.account {
            Some(account) if persisted.is_connected => Self {
                account: Some(account),
                is_connected: true,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// The subset that survives a restart
    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            account: self.account.clone(),
            is_connected: self.is_connected,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_connected {
            SessionPhase::Connected
        } else if self.is_connecting {
            SessionPhase::Connecting
        } else {
            SessionPhase::Disconnected
        }
    }

    /// Whether the state upholds the session invariants
    pub fn is_consistent(&self) -> bool {
        self.is_connected == self.account.is_some() && !(self.is_connected && self.is_connecting)
    }

    /// Balance of the connected account, if any
    pub fn balance(&self) -> Option<Decimal> {
        self.account.as_ref().map(|a| a.balance)
    }
}

/// Persisted subset of the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default)]
    pub account: Option<WalletAccount>,
    #[serde(default)]
    pub is_connected: bool,
}

/// On-disk envelope: `{"state": {...}, "version": 0}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedEnvelope {
    pub state: PersistedSession,
    #[serde(default)]
    pub version: u32,
}

impl PersistedEnvelope {
    pub fn new(state: PersistedSession) -> Self {
        Self {
            state,
            version: WALLET_STORAGE_VERSION,
        }
    }
}
