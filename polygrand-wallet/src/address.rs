//! Mock account generation
//!
//! Produces accounts that look like real ones (58 base-32 symbols, a
//! plausible balance, a friendly name) without touching any chain.

use polygrand_core::WalletAccount;
use polygrand_core::wallet::{ADDRESS_ALPHABET, ADDRESS_LENGTH};
use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;

use crate::types::{MAX_BALANCE_DELTA_CENTS, MAX_MOCK_BALANCE, MIN_MOCK_BALANCE, WALLET_NAMES};

/// Generate a 58-symbol address over the base-32 alphabet
pub fn generate_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ADDRESS_LENGTH)
        .map(|_| ADDRESS_ALPHABET[rng.random_range(0..ADDRESS_ALPHABET.len())] as char)
        .collect()
}

/// Whole-unit balance in `[10, 1000)`
pub fn generate_balance<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    Decimal::from(rng.random_range(MIN_MOCK_BALANCE..MAX_MOCK_BALANCE))
}

/// One of the fixed wallet names
pub fn generate_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    WALLET_NAMES
        .choose(rng)
        .copied()
        .unwrap_or(WALLET_NAMES[0])
        .to_string()
}

/// A complete mock account
pub fn generate_account<R: Rng + ?Sized>(rng: &mut R) -> WalletAccount {
    WalletAccount {
        address: generate_address(rng),
        balance: generate_balance(rng),
        name: generate_name(rng),
    }
}

/// Nudge a balance by a signed amount of at most 5.00, never below zero
pub fn perturb_balance<R: Rng + ?Sized>(rng: &mut R, balance: Decimal) -> Decimal {
    let cents = rng.random_range(-MAX_BALANCE_DELTA_CENTS..=MAX_BALANCE_DELTA_CENTS);
    balance.saturating_add(Decimal::new(cents, 2)).max(Decimal::ZERO)
}
