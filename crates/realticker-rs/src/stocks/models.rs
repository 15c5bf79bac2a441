//! Stocks module models.
//!
//! This module contains data structures for the ranked listing and the
//! six-month daily price history of a single ticker.

use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};


/// One row of the ranked top-10 listing.
///
/// `change` is the latest day-over-day move as a signed percentage.
/// `market_cap` is only populated for stocks the service has sized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSummary {
    pub ticker: String,
    pub company: String,
    pub price: f64,
    pub change: f64,
    pub volume: u64,
    #[serde(default)]
    pub market_cap: Option<u64>,
}


/// A single closing-price observation, day precision.
///
/// Immutable once received; the service guarantees a non-negative price
/// and the SDK rejects responses that break that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{}: {}", date, price)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}


/// Sort key accepted by the top-10 listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBy {
    Volume,
    Growth,
    MarketCap,
}

impl RankBy {
    pub fn as_str(self) -> &'static str {
        match self {
            RankBy::Volume => "volume",
            RankBy::Growth => "growth",
            RankBy::MarketCap => "market_cap",
        }
    }
}


/// Query parameters for the top-10 listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TopStocksQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<RankBy>,
}


#[derive(Debug, Clone, Deserialize, Display)]
#[display("{}: {} history points", ticker, history.len())]


/// Response model for API endpoint.
///
pub struct GetStockHistoryResponse {
    pub ticker: String,
    pub history: Vec<PricePoint>,
}
