//! PolyGrand API client
//!
//! Thin wrapper over `reqwest` for the backend REST API. Non-success
//! responses become `PolygrandError::Rejected` carrying the backend's
//! `detail` message, which the UI shows verbatim.

use async_trait::async_trait;
use polygrand_core::{
    CreateMarketRequest, LeaderboardEntry, Market, PlatformStats, PolygrandError,
    PolygrandResult, TradeRequest, UserPosition, UserTrade,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::api::MarketApi;
use crate::config::ClientConfig;

/// PolyGrand backend client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> PolygrandResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            PolygrandError::config(format!("Invalid API base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PolygrandError::config(format!(
                "API base URL '{}' cannot take paths",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PolygrandError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!("PolyGrand API client targeting {}", base_url);
        Ok(Self { client, base_url })
    }

    /// Client configured from the environment
    pub fn from_env() -> PolygrandResult<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    // ========================================================================
    // Transport
    // ========================================================================

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json(&self, segments: &[&str]) -> PolygrandResult<Value> {
        let url = self.endpoint(segments);
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| PolygrandError::network(format!("GET {} failed: {}", url, e)))?;

        read_json(response).await
    }

    async fn post_json(&self, segments: &[&str], body: Value) -> PolygrandResult<Value> {
        let url = self.endpoint(segments);
        debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| PolygrandError::network(format!("POST {} failed: {}", url, e)))?;

        read_json(response).await
    }
}

#[async_trait]
impl MarketApi for ApiClient {
    #[instrument(skip(self))]
    async fn get_markets(&self) -> PolygrandResult<Vec<Market>> {
        let value = self.get_json(&["markets", ""]).await?;
        let markets = Market::list_from_backend(&value);
        debug!("Fetched {} markets", markets.len());
        Ok(markets)
    }

    #[instrument(skip(self))]
    async fn get_market(&self, id: &str) -> PolygrandResult<Market> {
        let value = self.get_json(&["markets", id]).await?;
        market_from_response(&value, id)
    }

    #[instrument(skip(self, request), fields(question = %request.question))]
    async fn create_market(&self, request: &CreateMarketRequest) -> PolygrandResult<Market> {
        let body = to_body(request)?;
        let value = self.post_json(&["markets", ""], body).await?;
        let market = market_from_response(&value, "new market")?;
        info!("Created market {}", market.id);
        Ok(market)
    }

    #[instrument(skip(self, request), fields(outcome = %request.outcome, amount = %request.amount))]
    async fn execute_trade(&self, market_id: &str, request: &TradeRequest) -> PolygrandResult<Value> {
        let body = to_body(request)?;
        let receipt = self.post_json(&["markets", market_id, "trade"], body).await?;
        info!("Trade accepted on market {}", market_id);
        Ok(receipt)
    }

    #[instrument(skip(self))]
    async fn get_user_positions(&self, address: &str) -> PolygrandResult<Vec<UserPosition>> {
        let value = self.get_json(&["user", address, "positions"]).await?;
        list_from(value, "positions")
    }

    #[instrument(skip(self))]
    async fn get_user_trades(&self, address: &str) -> PolygrandResult<Vec<UserTrade>> {
        let value = self.get_json(&["user", address, "history"]).await?;
        list_from(value, "trade history")
    }

    #[instrument(skip(self))]
    async fn get_platform_stats(&self) -> PolygrandResult<PlatformStats> {
        let value = self.get_json(&["stats", "platform"]).await?;
        Ok(PlatformStats::from_backend(&value))
    }

    #[instrument(skip(self))]
    async fn get_leaderboard(&self) -> PolygrandResult<Vec<LeaderboardEntry>> {
        let value = self.get_json(&["leaderboard"]).await?;
        list_from(value, "leaderboard")
    }
}

// ============================================================================
// Response handling
// ============================================================================

async fn read_json(response: Response) -> PolygrandResult<Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| PolygrandError::network(format!("Failed to read response body: {}", e)))?;

    if !status.is_success() {
        let detail = rejection_detail(&body);
        warn!("Backend rejected request ({}): {}", status, detail);
        return Err(PolygrandError::rejected(status.as_u16(), detail));
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&body)
        .map_err(|e| PolygrandError::parse(format!("Response is not JSON: {}", e)))
}

/// The backend's `detail` message, or the raw body when there is none
fn rejection_detail(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        match map.get("detail") {
            Some(Value::String(detail)) => return detail.clone(),
            Some(Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
    }
    body.trim().to_string()
}

fn market_from_response(value: &Value, what: &str) -> PolygrandResult<Market> {
    if !value.is_object() {
        return Err(PolygrandError::parse(format!(
            "Expected a market object for {}",
            what
        )));
    }

    let (market, report) = Market::from_backend_with_report(value);
    if !report.is_complete() {
        debug!(
            "Market {} filled defaults for {:?}",
            market.id,
            report.defaulted()
        );
    }
    Ok(market)
}

/// A JSON array of records; a missing body counts as empty
fn list_from<T: DeserializeOwned>(value: Value, what: &str) -> PolygrandResult<Vec<T>> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value)
        .map_err(|e| PolygrandError::parse(format!("Failed to parse {}: {}", what, e)))
}

fn to_body<T: serde::Serialize>(request: &T) -> PolygrandResult<Value> {
    serde_json::to_value(request)
        .map_err(|e| PolygrandError::parse(format!("Failed to encode request: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ClientConfig::with_base_url(base).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_paths() {
        let api = client("http://localhost:3000/api/v1");
        assert_eq!(
            api.endpoint(&["markets", ""]).as_str(),
            "http://localhost:3000/api/v1/markets/"
        );
        assert_eq!(
            api.endpoint(&["user", "ADDR", "history"]).as_str(),
            "http://localhost:3000/api/v1/user/ADDR/history"
        );
    }

    #[test]
    fn test_endpoint_escapes_segments() {
        let api = client("http://localhost:3000/api/v1");
        assert_eq!(
            api.endpoint(&["markets", "a/b"]).as_str(),
            "http://localhost:3000/api/v1/markets/a%2Fb"
        );
    }

    #[test]
    fn test_rejection_detail() {
        assert_eq!(rejection_detail(r#"{"detail":"Market is closed"}"#), "Market is closed");
        assert_eq!(
            rejection_detail(r#"{"detail":[{"msg":"field required"}]}"#),
            r#"[{"msg":"field required"}]"#
        );
        assert_eq!(rejection_detail(r#"{"error":"boom"}"#), r#"{"error":"boom"}"#);
        assert_eq!(rejection_detail("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(rejection_detail(""), "");
    }

    #[test]
    fn test_list_from_null_is_empty() {
        let positions: Vec<UserPosition> = list_from(Value::Null, "positions").unwrap();
        assert!(positions.is_empty());

        let err = list_from::<UserPosition>(json!({"oops": true}), "positions").unwrap_err();
        assert!(matches!(err, PolygrandError::Parse(_)));
    }

    #[test]
    fn test_market_from_non_object() {
        assert!(market_from_response(&json!([]), "m1").is_err());
        assert_eq!(
            market_from_response(&json!({"id": "m1"}), "m1").unwrap().id,
            "m1"
        );
    }
}
