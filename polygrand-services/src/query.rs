//! Query layer
//!
//! Every read the pages make goes through `fetch_query`, which turns a
//! fallible fetch into a `QueryState` the views render directly. A failed
//! fetch is retried once before the error is surfaced.
//!
//! `QueryCache` keeps the last good result per query key so repeated page
//! renders within the stale window do not hit the backend again. Mutations
//! invalidate the keys they affect.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use polygrand_core::PolygrandResult;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Automatic retries after the first failed attempt
pub const DEFAULT_RETRIES: u32 = 1;

/// Pause before a retry
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// How long a cached result is served without refetching
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(30);

/// Result of a query as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum QueryState<T> {
    Loading,
    Data(T),
    Error(String),
}

impl<T> QueryState<T> {
    pub fn from_result(result: PolygrandResult<T>) -> Self {
        match result {
            Ok(value) => QueryState::Data(value),
            Err(e) => QueryState::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Data(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            QueryState::Data(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Loading => QueryState::Loading,
            QueryState::Data(value) => QueryState::Data(f(value)),
            QueryState::Error(message) => QueryState::Error(message),
        }
    }
}

/// Retry behaviour of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub retries: u32,
    pub retry_delay: Duration,
}

impl QueryOptions {
    /// Fail on the first error
    pub const fn no_retry() -> Self {
        Self {
            retries: 0,
            retry_delay: Duration::ZERO,
        }
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// Run `fetch`, retrying per `options`, and report the outcome as a `QueryState`
pub async fn fetch_query<T, F, Fut>(key: &str, options: QueryOptions, mut fetch: F) -> QueryState<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = PolygrandResult<T>>,
{
    let mut attempt = 0;
    loop {
        match fetch().await {
            Ok(value) => return QueryState::Data(value),
            Err(e) if attempt < options.retries => {
                attempt += 1;
                warn!("Query {} failed, retrying ({}/{}): {}", key, attempt, options.retries, e);
                tokio::time::sleep(options.retry_delay).await;
            }
            Err(e) => {
                warn!("Query {} failed: {}", key, e);
                return QueryState::Error(e.to_string());
            }
        }
    }
}

// ============================================================================
// Cache
// ============================================================================

#[derive(Debug, Clone)]
struct CachedQuery {
    value: Value,
    fetched_at: DateTime<Utc>,
}

/// Last good result per query key, stored as JSON
pub struct QueryCache {
    entries: RwLock<HashMap<String, CachedQuery>>,
    stale_time: Duration,
}

impl QueryCache {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stale_time,
        }
    }

    /// Fresh cached value for `key`, if any
    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.read();
        let cached = entries.get(key)?;

        let age = Utc::now().signed_duration_since(cached.fetched_at);
        if age.to_std().map_or(true, |age| age >= self.stale_time) {
            return None;
        }

        serde_json::from_value(cached.value.clone()).ok()
    }

    pub fn insert<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries.write().insert(
                    key.to_string(),
                    CachedQuery {
                        value,
                        fetched_at: Utc::now(),
                    },
                );
            }
            Err(e) => warn!("Not caching query {}: {}", key, e),
        }
    }

    /// Drop `key` and every key nested under it (`markets` also drops `markets/<id>`)
    pub fn invalidate(&self, key: &str) {
        let nested = format!("{}/", key);
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|k, _| k != key && !k.starts_with(&nested));
        debug!("Invalidated {} cached queries under {}", before - entries.len(), key);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME)
    }
}
