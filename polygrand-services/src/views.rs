//! Page view models
//!
//! Pure functions from query results to what each page shows. Nothing here
//! fetches; the pages hand in `QueryState`s from `MarketService` plus the
//! current time, which keeps every label reproducible in tests.

use chrono::{DateTime, NaiveDateTime, Utc};
use polygrand_core::{Market, PlatformStats, UserPosition, UserTrade, WalletAccount};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::format::{
    algo_label, compact_volume_label, fixed, micro_to_algo, outcome_percents, relative_time,
    volume_label,
};
use crate::query::QueryState;

/// Markets shown on the home page
pub const FEATURED_MARKETS: usize = 6;

/// Skeleton cards shown on the home page while loading
pub const HOME_PLACEHOLDERS: usize = 3;

/// Skeleton cards shown on the markets page while loading
pub const MARKETS_PLACEHOLDERS: usize = 6;

pub const NO_MARKETS_YET: &str = "No markets yet";
pub const NO_MARKETS_AVAILABLE: &str = "No markets available yet";
pub const MARKET_NOT_FOUND: &str = "Market not found";
pub const CONNECT_TO_VIEW_PROFILE: &str = "Connect your wallet to view your profile and positions";
pub const CONNECT_TO_TRADE: &str = "Connect your wallet to trade";
pub const NO_POSITIONS: &str = "No active positions";
pub const NO_TRADES: &str = "No trade history";

/// Resolution label when the market has no usable end time
pub const RESOLUTION_UNKNOWN: &str = "TBD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketStatus {
    Active,
    Resolved,
}

impl MarketStatus {
    pub fn of(market: &Market) -> Self {
        if market.is_resolved {
            MarketStatus::Resolved
        } else {
            MarketStatus::Active
        }
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketStatus::Active => write!(f, "Active"),
            MarketStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

// ============================================================================
// Market card
// ============================================================================

/// One market tile in a grid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: MarketStatus,
    pub outcome_a_name: String,
    pub outcome_b_name: String,
    /// Width of the outcome A bar, 0..=100
    pub outcome_a_percent: u8,
    pub outcome_b_percent: u8,
    pub volume_label: String,
    pub resolution_label: String,
}

impl MarketCard {
    pub fn new(market: &Market, now: DateTime<Utc>) -> Self {
        let (outcome_a_percent, outcome_b_percent) = outcome_percents(market);

        let resolution_label = match market.resolution_datetime() {
            Some(at) => format!("Resolves {}", relative_time(at, now)),
            None => RESOLUTION_UNKNOWN.to_string(),
        };

        Self {
            id: market.id.clone(),
            title: market.title.clone(),
            description: market.description.clone(),
            status: MarketStatus::of(market),
            outcome_a_name: market.outcome_a_name.clone(),
            outcome_b_name: market.outcome_b_name.clone(),
            outcome_a_percent,
            outcome_b_percent,
            volume_label: compact_volume_label(market.total_volume),
            resolution_label,
        }
    }
}

/// A grid of market cards, or what to show instead
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MarketGrid {
    Loading { placeholders: usize },
    Cards { cards: Vec<MarketCard> },
    Empty { message: String },
}

impl MarketGrid {
    pub fn cards(&self) -> &[MarketCard] {
        match self {
            MarketGrid::Cards { cards } => cards,
            _ => &[],
        }
    }

    pub fn empty_message(&self) -> Option<&str> {
        match self {
            MarketGrid::Empty { message } => Some(message),
            _ => None,
        }
    }
}

// ============================================================================
// Home
// ============================================================================

/// Platform statistics panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPanel {
    pub total_markets: u64,
    /// Whole ALGO
    pub total_volume_label: String,
    pub active_users: u64,
    pub resolved_markets: u64,
}

impl StatsPanel {
    /// Zeroes when the stats are not available
    pub fn new(stats: Option<&PlatformStats>) -> Self {
        let stats = stats.cloned().unwrap_or_default();
        let total_volume_label = if stats.total_volume.is_zero() {
            "0".to_string()
        } else {
            fixed(micro_to_algo(stats.total_volume), 0)
        };

        Self {
            total_markets: stats.total_markets,
            total_volume_label,
            active_users: stats.active_users,
            resolved_markets: stats.resolved_markets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub stats: StatsPanel,
    pub featured: MarketGrid,
}

impl HomeView {
    /// A failed market fetch renders like an empty list
    pub fn new(
        markets: &QueryState<Vec<Market>>,
        stats: &QueryState<PlatformStats>,
        now: DateTime<Utc>,
    ) -> Self {
        if let Some(e) = markets.error() {
            warn!("Home page markets unavailable: {}", e);
        }
        if let Some(e) = stats.error() {
            warn!("Home page stats unavailable: {}", e);
        }

        let featured = match markets {
            QueryState::Loading => MarketGrid::Loading {
                placeholders: HOME_PLACEHOLDERS,
            },
            QueryState::Data(markets) if !markets.is_empty() => MarketGrid::Cards {
                cards: markets
                    .iter()
                    .take(FEATURED_MARKETS)
                    .map(|m| MarketCard::new(m, now))
                    .collect(),
            },
            _ => MarketGrid::Empty {
                message: NO_MARKETS_YET.to_string(),
            },
        };

        Self {
            stats: StatsPanel::new(stats.data()),
            featured,
        }
    }
}

// ============================================================================
// Markets
// ============================================================================

/// Status filter on the markets page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Resolved,
}

impl StatusFilter {
    pub fn matches(&self, market: &Market) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !market.is_resolved,
            StatusFilter::Resolved => market.is_resolved,
        }
    }

    /// Parse a filter name ("all", "active", "resolved")
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "active" => Some(StatusFilter::Active),
            "resolved" => Some(StatusFilter::Resolved),
            _ => None,
        }
    }
}

/// Case-insensitive substring match on title or description
pub fn matches_search(market: &Market, term: &str) -> bool {
    let term = term.to_lowercase();
    market.title.to_lowercase().contains(&term) || market.description.to_lowercase().contains(&term)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketsView {
    pub search: String,
    pub filter: StatusFilter,
    /// "Showing N markets", only when there is something to show
    pub summary: Option<String>,
    pub grid: MarketGrid,
}

impl MarketsView {
    pub fn new(
        markets: &QueryState<Vec<Market>>,
        search: &str,
        filter: StatusFilter,
        now: DateTime<Utc>,
    ) -> Self {
        let grid = match markets {
            QueryState::Loading => MarketGrid::Loading {
                placeholders: MARKETS_PLACEHOLDERS,
            },
            _ => {
                if let Some(e) = markets.error() {
                    warn!("Markets page data unavailable: {}", e);
                }

                let cards: Vec<MarketCard> = markets
                    .data()
                    .map(|all| {
                        all.iter()
                            .filter(|m| matches_search(m, search) && filter.matches(m))
                            .map(|m| MarketCard::new(m, now))
                            .collect()
                    })
                    .unwrap_or_default();

                if cards.is_empty() {
                    let message = if search.is_empty() {
                        NO_MARKETS_AVAILABLE.to_string()
                    } else {
                        format!("No markets match \"{}\"", search)
                    };
                    MarketGrid::Empty { message }
                } else {
                    MarketGrid::Cards { cards }
                }
            }
        };

        let summary = match grid.cards().len() {
            0 => None,
            1 => Some("Showing 1 market".to_string()),
            n => Some(format!("Showing {} markets", n)),
        };

        Self {
            search: search.to_string(),
            filter,
            summary,
            grid,
        }
    }
}

// ============================================================================
// Market detail
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: MarketStatus,
    pub outcome_a_name: String,
    pub outcome_b_name: String,
    pub outcome_a_percent: u8,
    pub outcome_b_percent: u8,
    pub volume_label: String,
    pub resolution_label: String,
    /// "#<app id>"
    pub app_label: String,
    /// Set once the market resolved with a known winner
    pub winner: Option<String>,
}

impl MarketDetail {
    pub fn new(market: &Market, now: DateTime<Utc>) -> Self {
        let (outcome_a_percent, outcome_b_percent) = outcome_percents(market);

        Self {
            id: market.id.clone(),
            title: market.title.clone(),
            description: market.description.clone(),
            status: MarketStatus::of(market),
            outcome_a_name: market.outcome_a_name.clone(),
            outcome_b_name: market.outcome_b_name.clone(),
            outcome_a_percent,
            outcome_b_percent,
            volume_label: volume_label(market.total_volume),
            resolution_label: market
                .resolution_datetime()
                .map(|at| relative_time(at, now))
                .unwrap_or_else(|| RESOLUTION_UNKNOWN.to_string()),
            app_label: format!("#{}", market.app_id),
            winner: market.winning_outcome_name().map(str::to_string),
        }
    }
}

/// The right-hand trading panel of the detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TradePanel {
    ConnectWallet { message: String },
    Resolved { winner: Option<String> },
    Open { balance_label: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MarketDetailView {
    Loading,
    NotFound { message: String },
    Found { market: MarketDetail, panel: TradePanel },
}

impl MarketDetailView {
    /// Any fetch failure shows as "not found"
    pub fn new(
        market: &QueryState<Market>,
        account: Option<&WalletAccount>,
        now: DateTime<Utc>,
    ) -> Self {
        match market {
            QueryState::Loading => MarketDetailView::Loading,
            QueryState::Error(e) => {
                warn!("Market detail unavailable: {}", e);
                MarketDetailView::NotFound {
                    message: MARKET_NOT_FOUND.to_string(),
                }
            }
            QueryState::Data(market) => {
                let detail = MarketDetail::new(market, now);
                let panel = match account {
                    None => TradePanel::ConnectWallet {
                        message: CONNECT_TO_TRADE.to_string(),
                    },
                    Some(_) if market.is_resolved => TradePanel::Resolved {
                        winner: detail.winner.clone(),
                    },
                    Some(account) => TradePanel::Open {
                        balance_label: algo_label(account.balance),
                    },
                };
                MarketDetailView::Found {
                    market: detail,
                    panel,
                }
            }
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRow {
    pub market_id: String,
    /// Combined outcome token holdings
    pub tokens_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRow {
    pub market_id: String,
    pub outcome: String,
    pub amount_label: String,
    pub shares_label: String,
    pub when: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub short_address: String,
    pub balance_label: String,
    pub position_count: usize,
    pub trade_count: usize,
    pub positions: Vec<PositionRow>,
    /// Shown instead of an empty positions table
    pub positions_empty: Option<String>,
    pub trades: Vec<TradeRow>,
    pub trades_empty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProfileView {
    ConnectWallet { message: String },
    Connected(ProfileSummary),
}

impl ProfileView {
    pub fn new(
        account: Option<&WalletAccount>,
        positions: &QueryState<Vec<UserPosition>>,
        trades: &QueryState<Vec<UserTrade>>,
        now: DateTime<Utc>,
    ) -> Self {
        let Some(account) = account else {
            return ProfileView::ConnectWallet {
                message: CONNECT_TO_VIEW_PROFILE.to_string(),
            };
        };

        let positions: Vec<PositionRow> = positions
            .data()
            .map(|all| {
                all.iter()
                    .map(|p| PositionRow {
                        market_id: p.market_id.clone(),
                        tokens_label: fixed(
                            micro_to_algo(p.outcome_a_balance.saturating_add(p.outcome_b_balance)),
                            2,
                        ),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let trades: Vec<TradeRow> = trades
            .data()
            .map(|all| all.iter().map(|t| trade_row(t, now)).collect())
            .unwrap_or_default();

        ProfileView::Connected(ProfileSummary {
            short_address: account.short_address(),
            balance_label: fixed(account.balance, 2),
            position_count: positions.len(),
            trade_count: trades.len(),
            positions_empty: positions.is_empty().then(|| NO_POSITIONS.to_string()),
            positions,
            trades_empty: trades.is_empty().then(|| NO_TRADES.to_string()),
            trades,
        })
    }
}

fn trade_row(trade: &UserTrade, now: DateTime<Utc>) -> TradeRow {
    let when = trade
        .created_at
        .as_deref()
        .and_then(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|at| at.with_timezone(&Utc))
                .or_else(|_| {
                    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc())
                })
                .ok()
        })
        .map(|at| relative_time(at, now));

    TradeRow {
        market_id: trade.market_id.clone(),
        outcome: trade.outcome.clone(),
        amount_label: algo_label(micro_to_algo(trade.amount)),
        shares_label: fixed(micro_to_algo(trade.shares), 2),
        when,
    }
}

/// Expected payout of a stake at the given odds: `amount / (percent / 100)`
pub fn estimated_payout(amount: Decimal, percent: u8) -> Option<Decimal> {
    if percent == 0 || amount <= Decimal::ZERO {
        return None;
    }
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .checked_div(Decimal::from(percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use polygrand_core::PolygrandError;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
    }

    fn market(id: &str, title: &str, resolved: bool) -> Market {
        Market::from_backend(&json!({
            "id": id,
            "question": title,
            "description": format!("About {}", title.to_lowercase()),
            "outcomes": ["Yes", "No"],
            "prices": {"Yes": 0.67, "No": 0.33},
            "status": if resolved { "resolved" } else { "active" },
            "resolved_outcome": if resolved { Some("Yes") } else { None },
            "end_time": "2026-03-04T00:00:00Z",
            "total_volume": 2500000
        }))
    }

    fn account() -> WalletAccount {
        WalletAccount {
            address: "ABCDEFGHIJ".repeat(5) + "KLMNOPQR",
            balance: dec!(123.456),
            name: "Main Wallet".to_string(),
        }
    }

    #[test]
    fn test_market_card() {
        let card = MarketCard::new(&market("m1", "Rain tomorrow?", false), now());

        assert_eq!(card.outcome_a_percent, 67);
        assert_eq!(card.outcome_b_percent, 33);
        assert_eq!(card.status, MarketStatus::Active);
        assert_eq!(card.status.to_string(), "Active");
        assert_eq!(card.volume_label, "2.5K ALGO");
        assert_eq!(card.resolution_label, "Resolves in 3 days");
    }

    #[test]
    fn test_market_card_without_end_time() {
        let bare = Market::from_backend(&json!({"id": "m2"}));
        let card = MarketCard::new(&bare, now());

        assert_eq!(card.resolution_label, "TBD");
        assert_eq!(card.volume_label, "0 ALGO");
        assert_eq!((card.outcome_a_percent, card.outcome_b_percent), (50, 50));
    }

    #[test]
    fn test_home_empty_state() {
        let view = HomeView::new(&QueryState::Data(vec![]), &QueryState::Loading, now());
        assert_eq!(view.featured.empty_message(), Some("No markets yet"));
        assert_eq!(view.stats.total_markets, 0);
        assert_eq!(view.stats.total_volume_label, "0");
    }

    #[test]
    fn test_home_error_shows_empty_state() {
        let markets = QueryState::Error(PolygrandError::network("down").to_string());
        let view = HomeView::new(&markets, &QueryState::Loading, now());
        assert_eq!(view.featured.empty_message(), Some("No markets yet"));
    }

    #[test]
    fn test_home_features_first_six() {
        let markets: Vec<Market> = (0..9)
            .map(|i| market(&format!("m{}", i), "Q", false))
            .collect();
        let stats = PlatformStats {
            total_markets: 9,
            total_volume: dec!(3400000),
            active_users: 12,
            resolved_markets: 2,
        };

        let view = HomeView::new(&QueryState::Data(markets), &QueryState::Data(stats), now());

        let ids: Vec<&str> = view.featured.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["m0", "m1", "m2", "m3", "m4", "m5"]);
        assert_eq!(view.stats.total_volume_label, "3");
        assert_eq!(view.stats.active_users, 12);
    }

    #[test]
    fn test_home_loading() {
        let view = HomeView::new(&QueryState::Loading, &QueryState::Loading, now());
        assert_eq!(view.featured, MarketGrid::Loading { placeholders: 3 });
    }

    #[test]
    fn test_markets_empty_states() {
        let empty = MarketsView::new(&QueryState::Data(vec![]), "", StatusFilter::All, now());
        assert_eq!(empty.grid.empty_message(), Some("No markets available yet"));
        assert_eq!(empty.summary, None);

        let markets = QueryState::Data(vec![market("m1", "Rain tomorrow?", false)]);
        let no_match = MarketsView::new(&markets, "election", StatusFilter::All, now());
        assert_eq!(
            no_match.grid.empty_message(),
            Some("No markets match \"election\"")
        );
    }

    #[test]
    fn test_markets_search_and_filter() {
        let markets = QueryState::Data(vec![
            market("m1", "Rain tomorrow?", false),
            market("m2", "Election winner", true),
            market("m3", "Rain in April", true),
        ]);

        let rain = MarketsView::new(&markets, "RAIN", StatusFilter::All, now());
        assert_eq!(rain.grid.cards().len(), 2);
        assert_eq!(rain.summary.as_deref(), Some("Showing 2 markets"));

        let resolved_rain = MarketsView::new(&markets, "rain", StatusFilter::Resolved, now());
        let ids: Vec<&str> = resolved_rain.grid.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["m3"]);
        assert_eq!(resolved_rain.summary.as_deref(), Some("Showing 1 market"));

        // Description matches too
        let about = MarketsView::new(&markets, "about election", StatusFilter::All, now());
        assert_eq!(about.grid.cards().len(), 1);

        let active = MarketsView::new(&markets, "", StatusFilter::Active, now());
        assert_eq!(active.grid.cards().len(), 1);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!(StatusFilter::from_str("Active"), Some(StatusFilter::Active));
        assert_eq!(StatusFilter::from_str("resolved"), Some(StatusFilter::Resolved));
        assert_eq!(StatusFilter::from_str("all"), Some(StatusFilter::All));
        assert_eq!(StatusFilter::from_str("closed"), None);
    }

    #[test]
    fn test_market_detail_panels() {
        let open = QueryState::Data(market("m1", "Rain tomorrow?", false));

        let anonymous = MarketDetailView::new(&open, None, now());
        match anonymous {
            MarketDetailView::Found { market, panel } => {
                assert_eq!(market.volume_label, "2.50 ALGO");
                assert_eq!(market.resolution_label, "in 3 days");
                assert_eq!(market.app_label, "#0");
                assert_eq!(
                    panel,
                    TradePanel::ConnectWallet {
                        message: "Connect your wallet to trade".to_string()
                    }
                );
            }
            other => panic!("unexpected view: {:?}", other),
        }

        let account = account();
        match MarketDetailView::new(&open, Some(&account), now()) {
            MarketDetailView::Found { panel, .. } => assert_eq!(
                panel,
                TradePanel::Open {
                    balance_label: "123.46 ALGO".to_string()
                }
            ),
            other => panic!("unexpected view: {:?}", other),
        }

        let resolved = QueryState::Data(market("m2", "Done", true));
        match MarketDetailView::new(&resolved, Some(&account), now()) {
            MarketDetailView::Found { panel, .. } => assert_eq!(
                panel,
                TradePanel::Resolved {
                    winner: Some("Yes".to_string())
                }
            ),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_market_detail_not_found() {
        let failed = QueryState::Error("Request rejected (404): Market not found".to_string());
        assert_eq!(
            MarketDetailView::new(&failed, None, now()),
            MarketDetailView::NotFound {
                message: "Market not found".to_string()
            }
        );
        assert_eq!(
            MarketDetailView::new(&QueryState::Loading, None, now()),
            MarketDetailView::Loading
        );
    }

    #[test]
    fn test_profile_requires_wallet() {
        let view = ProfileView::new(None, &QueryState::Loading, &QueryState::Loading, now());
        assert_eq!(
            view,
            ProfileView::ConnectWallet {
                message: "Connect your wallet to view your profile and positions".to_string()
            }
        );
    }

    #[test]
    fn test_profile_summary() {
        let account = account();
        let positions = QueryState::Data(vec![UserPosition {
            market_id: "m1".to_string(),
            user_address: account.address.clone(),
            outcome_a_balance: dec!(1500000),
            outcome_b_balance: dec!(250000),
        }]);
        let trades = QueryState::Data(vec![]);

        let ProfileView::Connected(summary) =
            ProfileView::new(Some(&account), &positions, &trades, now())
        else {
            panic!("expected a connected profile");
        };

        assert_eq!(summary.balance_label, "123.46");
        assert_eq!(summary.position_count, 1);
        assert_eq!(summary.positions[0].tokens_label, "1.75");
        assert_eq!(summary.positions_empty, None);
        assert_eq!(summary.trade_count, 0);
        assert_eq!(summary.trades_empty.as_deref(), Some("No trade history"));
    }

    #[test]
    fn test_profile_huge_balances_saturate() {
        let account = account();
        let positions = QueryState::Data(vec![UserPosition {
            market_id: "m1".to_string(),
            user_address: account.address.clone(),
            outcome_a_balance: Decimal::MAX,
            outcome_b_balance: Decimal::MAX,
        }]);
        let trades = QueryState::Data(vec![]);

        let ProfileView::Connected(summary) =
            ProfileView::new(Some(&account), &positions, &trades, now())
        else {
            panic!("expected a connected profile");
        };
        assert_eq!(summary.positions[0].tokens_label, "79228162514264337593543.95");
    }

    #[test]
    fn test_estimated_payout() {
        assert_eq!(estimated_payout(dec!(10), 50), Some(dec!(20)));
        assert_eq!(estimated_payout(dec!(6.7), 67), Some(dec!(10)));
        assert_eq!(estimated_payout(dec!(10), 0), None);
        assert_eq!(estimated_payout(Decimal::ZERO, 50), None);
        assert_eq!(estimated_payout(Decimal::MAX, 50), None);
    }
}
