//! Display formatting shared by the page view models

use chrono::{DateTime, Utc};
use polygrand_core::Market;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// microAlgos in one ALGO
pub const MICROALGOS_PER_ALGO: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

pub fn micro_to_algo(micro: Decimal) -> Decimal {
    micro / MICROALGOS_PER_ALGO
}

/// ALGO to whole microAlgos, rounded down. `None` if out of range.
pub fn algo_to_micro(algo: Decimal) -> Option<Decimal> {
    algo.checked_mul(MICROALGOS_PER_ALGO).map(|micro| micro.floor())
}

/// `value` with exactly `dp` decimals, halves rounded away from zero
pub fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// Whole-percent odds of both outcomes, always summing to 100.
///
/// Outcome A is `price_a * 100` rounded half away from zero; a zero price
/// shows as an even 50/50 split. Prices too large to scale clamp like any
/// other out-of-range price.
pub fn outcome_percents(market: &Market) -> (u8, u8) {
    let price = market.outcome_a_price;
    let a = if price.is_zero() {
        50
    } else {
        let bound = if price.is_sign_negative() {
            Decimal::ZERO
        } else {
            Decimal::ONE_HUNDRED
        };
        price
            .checked_mul(Decimal::ONE_HUNDRED)
            .unwrap_or(bound)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
            .to_u8()
            .unwrap_or(50)
    };
    (a, 100 - a)
}

/// Card volume, e.g. "2.5K ALGO"
pub fn compact_volume_label(volume: Decimal) -> String {
    if volume.is_zero() {
        "0 ALGO".to_string()
    } else {
        format!("{}K ALGO", fixed(micro_to_algo(volume), 1))
    }
}

/// Detail page volume, e.g. "2.50 ALGO"
pub fn volume_label(volume: Decimal) -> String {
    if volume.is_zero() {
        "0 ALGO".to_string()
    } else {
        format!("{} ALGO", fixed(micro_to_algo(volume), 2))
    }
}

/// Balance in ALGO with two decimals
pub fn algo_label(amount: Decimal) -> String {
    format!("{} ALGO", fixed(amount, 2))
}

/// Human distance between `target` and `now`, e.g. "in 3 days" or "5 minutes ago"
pub fn relative_time(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = target.signed_duration_since(now);
    let seconds = delta.num_seconds().abs();
    let minutes = (seconds + 30) / 60;
    let hours = (minutes + 30) / 60;
    let days = (hours + 12) / 24;

    let distance = if seconds < 30 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes.max(1), "minute")
    } else if hours < 24 {
        format!("about {}", plural(hours.max(1), "hour"))
    } else if days < 30 {
        plural(days, "day")
    } else if days < 365 {
        plural((days + 15) / 30, "month")
    } else {
        format!("about {}", plural(days / 365, "year"))
    };

    if delta.num_seconds() >= 0 {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
