//! Market view model and the transform that builds it from backend records

use crate::backend::BackendMarket;
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Label used for the first outcome when the backend sends none
pub const DEFAULT_OUTCOME_A: &str = "Yes";

/// Label used for the second outcome when the backend sends none
pub const DEFAULT_OUTCOME_B: &str = "No";

/// Price used for an outcome the backend has no price for (0.5)
pub const DEFAULT_OUTCOME_PRICE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Index of the first outcome in `winning_outcome`
pub const OUTCOME_A: u8 = 0;

/// Index of the second outcome in `winning_outcome`
pub const OUTCOME_B: u8 = 1;

/// A binary prediction market as the presentation layer sees it.
///
/// Rebuilt from the backend on every fetch and never mutated locally.
/// `outcome_a_price + outcome_b_price` is not guaranteed to be 1: both
/// prices default to 0.5 independently when the backend has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Backend identifier, kept as sent (e.g. "market_abc123")
    pub id: String,
    /// On-chain application id (0 when not deployed)
    pub app_id: u64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub outcome_a_name: String,
    pub outcome_b_name: String,
    /// Outcome token (ASA) ids, 0 when unknown
    pub outcome_a_asa_id: u64,
    pub outcome_b_asa_id: u64,
    pub outcome_a_price: Decimal,
    pub outcome_b_price: Decimal,
    pub total_volume: Decimal,
    /// When the market resolves, as sent by the backend ("" when unknown)
    pub resolution_time: String,
    pub is_resolved: bool,
    /// `Some(0)` / `Some(1)` once resolved with a known label
    pub winning_outcome: Option<u8>,
    pub creator_address: String,
    /// The creator doubles as resolver until resolvers are modelled upstream
    pub resolver_address: String,
    pub created_at: String,
}

impl Market {
    /// Build a market from an arbitrarily shaped backend record
    pub fn from_backend(value: &Value) -> Self {
        Self::from_backend_with_report(value).0
    }

    /// Build a market and report which fields fell back to defaults
    pub fn from_backend_with_report(value: &Value) -> (Self, TransformReport) {
        transform(&BackendMarket::from_value(value))
    }

    /// Transform a backend market list. Anything but an array is an empty list.
    pub fn list_from_backend(value: &Value) -> Vec<Self> {
        value
            .as_array()
            .map(|items| items.iter().map(Self::from_backend).collect())
            .unwrap_or_default()
    }

    /// Outcome label by index (0 or 1)
    pub fn outcome_name(&self, outcome: u8) -> &str {
        if outcome == OUTCOME_A {
            &self.outcome_a_name
        } else {
            &self.outcome_b_name
        }
    }

    /// Outcome price by index (0 or 1)
    pub fn outcome_price(&self, outcome: u8) -> Decimal {
        if outcome == OUTCOME_A {
            self.outcome_a_price
        } else {
            self.outcome_b_price
        }
    }

    /// Label of the winning outcome, if resolved with a known winner
    pub fn winning_outcome_name(&self) -> Option<&str> {
        self.winning_outcome.map(|o| self.outcome_name(o))
    }

    /// Whether the market still accepts trades
    pub fn is_active(&self) -> bool {
        !self.is_resolved
    }

    /// Parsed resolution time. Accepts RFC 3339 and zone-less ISO timestamps
    /// (interpreted as UTC).
    pub fn resolution_datetime(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.resolution_time)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// A `Market` field that can fall back to a default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketField {
    Id,
    AppId,
    Title,
    Description,
    Category,
    OutcomeAName,
    OutcomeBName,
    OutcomeAAsaId,
    OutcomeBAsaId,
    OutcomeAPrice,
    OutcomeBPrice,
    TotalVolume,
    ResolutionTime,
    WinningOutcome,
    CreatorAddress,
    CreatedAt,
}

impl MarketField {
    /// Backend field name the value is read from
    pub fn source_name(&self) -> &'static str {
        match self {
            MarketField::Id => "id",
            MarketField::AppId => "app_id",
            MarketField::Title => "question",
            MarketField::Description => "description",
            MarketField::Category => "category",
            MarketField::OutcomeAName | MarketField::OutcomeBName => "outcomes",
            MarketField::OutcomeAAsaId | MarketField::OutcomeBAsaId => "outcome_token_ids",
            MarketField::OutcomeAPrice | MarketField::OutcomeBPrice => "prices",
            MarketField::TotalVolume => "total_volume",
            MarketField::ResolutionTime => "end_time",
            MarketField::WinningOutcome => "resolved_outcome",
            MarketField::CreatorAddress => "creator_address",
            MarketField::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for MarketField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.source_name())
    }
}

/// Which fields of a transformed market were filled from defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformReport {
    defaulted: Vec<MarketField>,
}

impl TransformReport {
    /// Fields that were defaulted, in `Market` declaration order
    pub fn defaulted(&self) -> &[MarketField] {
        &self.defaulted
    }

    pub fn is_defaulted(&self, field: MarketField) -> bool {
        self.defaulted.contains(&field)
    }

    /// True when every field came from the backend
    pub fn is_complete(&self) -> bool {
        self.defaulted.is_empty()
    }

    fn take<T>(&mut self, field: MarketField, value: Option<T>, default: impl FnOnce() -> T) -> T {
        match value {
            Some(v) => v,
            None => {
                self.defaulted.push(field);
                default()
            }
        }
    }
}

/// Map a backend record onto the view model.
///
/// Precedence is always "backend value, else default"; nothing here fails.
pub fn transform(backend: &BackendMarket) -> (Market, TransformReport) {
    let mut report = TransformReport::default();

    let id = report.take(MarketField::Id, backend.id.clone(), String::new);
    let app_id = report.take(MarketField::AppId, backend.app_id, || 0);
    let title = report.take(MarketField::Title, backend.question.clone(), String::new);
    let description = report.take(
        MarketField::Description,
        backend.description.clone(),
        String::new,
    );
    let category = backend.category.clone();
    if category.is_none() {
        report.defaulted.push(MarketField::Category);
    }

    let outcome_a_name = report.take(
        MarketField::OutcomeAName,
        backend.outcome(0).map(str::to_string),
        || DEFAULT_OUTCOME_A.to_string(),
    );
    let outcome_b_name = report.take(
        MarketField::OutcomeBName,
        backend.outcome(1).map(str::to_string),
        || DEFAULT_OUTCOME_B.to_string(),
    );

    let outcome_a_asa_id = report.take(
        MarketField::OutcomeAAsaId,
        backend.outcome_token_ids.get(&outcome_a_name).copied(),
        || 0,
    );
    let outcome_b_asa_id = report.take(
        MarketField::OutcomeBAsaId,
        backend.outcome_token_ids.get(&outcome_b_name).copied(),
        || 0,
    );

    let outcome_a_price = report.take(
        MarketField::OutcomeAPrice,
        backend.prices.get(&outcome_a_name).copied(),
        || DEFAULT_OUTCOME_PRICE,
    );
    let outcome_b_price = report.take(
        MarketField::OutcomeBPrice,
        backend.prices.get(&outcome_b_name).copied(),
        || DEFAULT_OUTCOME_PRICE,
    );

    let total_volume = report.take(MarketField::TotalVolume, backend.total_volume, || {
        Decimal::ZERO
    });
    let resolution_time = report.take(
        MarketField::ResolutionTime,
        backend.end_time.clone(),
        String::new,
    );

    let is_resolved = backend.is_resolved();
    let winning_outcome = if is_resolved {
        backend.resolved_outcome.as_deref().map(|label| {
            if label == outcome_a_name {
                OUTCOME_A
            } else {
                OUTCOME_B
            }
        })
    } else {
        None
    };
    if is_resolved && winning_outcome.is_none() {
        report.defaulted.push(MarketField::WinningOutcome);
    }

    let creator_address = report.take(
        MarketField::CreatorAddress,
        backend.creator_address.clone(),
        String::new,
    );
    let created_at = report.take(MarketField::CreatedAt, backend.created_at.clone(), String::new);

    let market = Market {
        id,
        app_id,
        title,
        description,
        category,
        outcome_a_name,
        outcome_b_name,
        outcome_a_asa_id,
        outcome_b_asa_id,
        outcome_a_price,
        outcome_b_price,
        total_volume,
        resolution_time,
        is_resolved,
        winning_outcome,
        resolver_address: creator_address.clone(),
        creator_address,
        created_at,
    };

    (market, report)
}
