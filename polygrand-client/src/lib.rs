//! PolyGrand market service client
//!
//! Typed access to the PolyGrand backend REST API. Market and stats payloads
//! are normalized through the `polygrand-core` transforms before they are
//! returned, so callers never see raw backend records.
//!
//! The base URL comes from `POLYGRAND_API_BASE_URL`
//! (default `http://localhost:3000/api/v1`).

pub mod api;
pub mod client;
pub mod config;

pub use api::MarketApi;
pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_API_BASE_URL};
