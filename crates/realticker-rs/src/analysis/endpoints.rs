//! Analysis module endpoints.
//!
//! This module implements the analysis trigger endpoint.

use crate::analysis::models::StockAnalysis;
use crate::client::RealtickerClient;
use crate::errors::RealtickerError;

const ANALYZE_STOCK: &str = "/api/stocks/{}/analyze";

impl RealtickerClient {
    /// Requests a fresh qualitative analysis for a ticker.
    ///
    /// **Endpoint:** `POST /api/stocks/{ticker}/analyze`
    ///
    /// This is a triggering call, not a lookup: each invocation may recompute
    /// on the service side and incur cost there. It is not idempotent, so
    /// callers should issue it once per selection rather than per render.
    ///
    /// # Parameters
    /// - `ticker` - The stock symbol to analyze
    ///
    /// # Returns
    /// [`StockAnalysis`] with trend, risk level, suggested action, an
    /// optional explanation and the service's disclaimer.
    pub async fn analyze_stock(
        &self,
        ticker: &str,
    ) -> Result<StockAnalysis, RealtickerError> {
        let url = ANALYZE_STOCK.replace("{}", ticker);
        let resp = self.post::<()>(&url, None).await?;
        let data: StockAnalysis = serde_json::from_str(&resp)?;
        Ok(data)
    }
}
