//! Upstream record shapes returned by the market service
//!
//! The market service answers with loosely typed JSON. The structs here are
//! the explicit schema the client reads out of it: every field is optional,
//! and a field carrying the wrong JSON type is treated as absent rather than
//! failing the whole record.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::str::FromStr;

/// A market record as the backend sends it (`MarketResponse` on the wire)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackendMarket {
    /// Backend identifier (e.g. "market_abc123"); numeric ids are stringified
    pub id: Option<String>,
    /// On-chain application id
    pub app_id: Option<u64>,
    pub question: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Outcome labels by position; `None` marks an entry that was missing,
    /// empty or not a string
    pub outcomes: Vec<Option<String>>,
    /// Price per outcome label
    pub prices: HashMap<String, Decimal>,
    /// Outcome token (ASA) id per outcome label
    pub outcome_token_ids: HashMap<String, u64>,
    /// Lifecycle status ("active", "resolved", ...)
    pub status: Option<String>,
    /// Label of the winning outcome once resolved
    pub resolved_outcome: Option<String>,
    pub end_time: Option<String>,
    pub created_at: Option<String>,
    pub total_volume: Option<Decimal>,
    pub creator_address: Option<String>,
}

impl BackendMarket {
    /// Read a backend market out of an arbitrary JSON value.
    ///
    /// Never fails: a non-object yields an all-empty record.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            id: obj.get("id").and_then(id_from_value),
            app_id: obj.get("app_id").and_then(u64_from_value),
            question: string_field(obj, "question"),
            description: string_field(obj, "description"),
            category: string_field(obj, "category"),
            outcomes: obj
                .get("outcomes")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(non_empty_string).collect())
                .unwrap_or_default(),
            prices: map_field(obj, "prices", decimal_from_value),
            outcome_token_ids: map_field(obj, "outcome_token_ids", u64_from_value),
            status: string_field(obj, "status"),
            resolved_outcome: string_field(obj, "resolved_outcome"),
            end_time: string_field(obj, "end_time"),
            created_at: string_field(obj, "created_at"),
            total_volume: obj.get("total_volume").and_then(decimal_from_value),
            creator_address: string_field(obj, "creator_address"),
        }
    }

    /// Outcome label at `index`, if the backend supplied a usable one
    pub fn outcome(&self, index: usize) -> Option<&str> {
        self.outcomes.get(index).and_then(|o| o.as_deref())
    }

    /// Whether the backend marks this market as resolved
    pub fn is_resolved(&self) -> bool {
        self.status.as_deref() == Some("resolved")
    }
}

/// Non-empty string field of a JSON object
pub(crate) fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(non_empty_string)
}

fn non_empty_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        other => non_empty_string(other),
    }
}

/// Unsigned integer from a JSON number (or numeric string)
pub(crate) fn u64_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Decimal from a JSON number (or numeric string).
///
/// Goes through the shortest textual form of the number so that `0.67`
/// becomes exactly `0.67` rather than the nearest binary float.
pub(crate) fn decimal_from_value(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn map_field<T>(
    obj: &Map<String, Value>,
    key: &str,
    convert: impl Fn(&Value) -> Option<T>,
) -> HashMap<String, T> {
    obj.get(key)
        .and_then(Value::as_object)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|(k, v)| convert(v).map(|converted| (k.clone(), converted)))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let value = json!({
            "id": "market_abc123",
            "app_id": 7001,
            "question": "Will it rain tomorrow?",
            "outcomes": ["Rain", "Dry"],
            "prices": {"Rain": 0.67, "Dry": 0.33},
            "outcome_token_ids": {"Rain": 11, "Dry": 12},
            "status": "active",
            "total_volume": 2500000.0
        });

        let market = BackendMarket::from_value(&value);
        assert_eq!(market.id.as_deref(), Some("market_abc123"));
        assert_eq!(market.app_id, Some(7001));
        assert_eq!(market.outcome(0), Some("Rain"));
        assert_eq!(market.outcome(1), Some("Dry"));
        assert_eq!(market.prices.get("Rain"), Some(&dec!(0.67)));
        assert_eq!(market.outcome_token_ids.get("Dry"), Some(&12));
        assert_eq!(market.total_volume, Some(dec!(2500000)));
        assert!(!market.is_resolved());
    }

    #[test]
    fn test_wrong_types_are_absent() {
        let value = json!({
            "id": true,
            "question": 42,
            "outcomes": "Yes,No",
            "prices": [0.5, 0.5],
            "total_volume": "lots"
        });

        let market = BackendMarket::from_value(&value);
        assert_eq!(market, BackendMarket::default());
    }

    #[test]
    fn test_non_object_input() {
        assert_eq!(BackendMarket::from_value(&json!(null)), BackendMarket::default());
        assert_eq!(BackendMarket::from_value(&json!([1, 2])), BackendMarket::default());
        assert_eq!(BackendMarket::from_value(&json!("market")), BackendMarket::default());
    }

    #[test]
    fn test_outcome_positions_are_kept() {
        let market = BackendMarket::from_value(&json!({"outcomes": ["", "Later", 3]}));
        assert_eq!(market.outcome(0), None);
        assert_eq!(market.outcome(1), Some("Later"));
        assert_eq!(market.outcome(2), None);
        assert_eq!(market.outcome(3), None);
    }

    #[test]
    fn test_numeric_id_and_decimal_strings() {
        let market = BackendMarket::from_value(&json!({"id": 12, "total_volume": "1e3"}));
        assert_eq!(market.id.as_deref(), Some("12"));
        assert_eq!(market.total_volume, Some(dec!(1000)));
    }
}
