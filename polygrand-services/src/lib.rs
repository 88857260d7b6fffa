//! PolyGrand services
//!
//! This crate provides the layer between the backend client, the wallet
//! session and the pages:
//! - Query layer with a single automatic retry and a per-key cache
//! - Market service (reads, trades, market creation)
//! - Page view models (home, markets, market detail, profile)
//! - Trade ticket and create-market form validation
//! - `AppContext`, the explicit owner of the session and services

pub mod context;
pub mod format;
pub mod market_draft;
pub mod market_service;
pub mod query;
pub mod trade_ticket;
pub mod views;

#[cfg(test)]
mod testing;

pub use context::AppContext;
pub use market_draft::{DraftError, MarketDraft};
pub use market_service::MarketService;
pub use query::{fetch_query, QueryCache, QueryOptions, QueryState};
pub use trade_ticket::{TicketError, TradeEstimate, TradeTicket};
pub use views::{
    HomeView, MarketCard, MarketDetail, MarketDetailView, MarketGrid, MarketStatus, MarketsView,
    ProfileView, StatsPanel, StatusFilter, TradePanel,
};
