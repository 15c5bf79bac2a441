//! Stocks module endpoints.
//!
//! This module implements API endpoints for the ranked stock listing and
//! per-ticker price history.
//!
//! # Usage
//!
//! All endpoint methods are available on [`RealtickerClient`](crate::client::RealtickerClient).
//! See the client documentation for a complete list of available methods.

use crate::client::RealtickerClient;
use crate::errors::RealtickerError;
use crate::stocks::models::{GetStockHistoryResponse, StockSummary, TopStocksQuery};

const GET_TOP_STOCKS: &str = "/api/stocks/top10";
const GET_STOCK_HISTORY: &str = "/api/stocks/{}/history";

impl RealtickerClient {
    /// Retrieves the ranked top-10 stock listing.
    ///
    /// **Endpoint:** `GET /api/stocks/top10`
    ///
    /// # Query Parameters
    /// - `by` - Sort key: `volume`, `growth` (over the covered window) or
    ///   `market_cap`. The service defaults to `volume` when omitted.
    ///
    /// # Returns
    /// An ordered `Vec` of [`StockSummary`], highest-ranked first.
    ///
    /// # Models Used
    /// - Query: [`TopStocksQuery`]
    /// - Response: [`StockSummary`]
    pub async fn get_top_stocks(
        &self,
        params: &TopStocksQuery,
    ) -> Result<Vec<StockSummary>, RealtickerError> {
        // Only append '?' if there are actual query params to avoid malformed URLs
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| RealtickerError::Other(
                format!("Failed to serialize params: {}", e),
            ))?;
        let url = if query.is_empty() {
            GET_TOP_STOCKS.to_string()
        } else {
            format!("{}?{}", GET_TOP_STOCKS, query)
        };
        let resp = self.get(&url).await?;
        let data: Vec<StockSummary> = serde_json::from_str(&resp)?;
        Ok(data)
    }


    /// Retrieves the six-month daily price history for a ticker.
    ///
    /// **Endpoint:** `GET /api/stocks/{ticker}/history`
    ///
    /// # Parameters
    /// - `ticker` - The stock symbol; the service matches it case-insensitively
    ///
    /// # Returns
    /// [`GetStockHistoryResponse`] with the echoed ticker and an ordered
    /// sequence of date/price points covering up to six months.
    ///
    /// A point with a negative or non-finite price fails with
    /// [`RealtickerError::InvalidData`]; an unparseable date fails with
    /// [`RealtickerError::ParseError`]. Neither has a usable fallback.
    pub async fn get_stock_history(
        &self,
        ticker: &str,
    ) -> Result<GetStockHistoryResponse, RealtickerError> {
        let url = GET_STOCK_HISTORY.replace("{}", ticker);
        let resp = self.get(&url).await?;
        let data: GetStockHistoryResponse = serde_json::from_str(&resp)?;
        for point in &data.history {
            if !point.price.is_finite() || point.price < 0.0 {
                return Err(RealtickerError::InvalidData(format!(
                    "price {} on {} for {}",
                    point.price, point.date, data.ticker,
                )));
            }
        }
        Ok(data)
    }
}
