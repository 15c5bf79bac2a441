//! session.rs
//!
//! Per-selection fetch orchestration.
//!
//! Selecting a ticker resets the shared state and starts two independent
//! requests for it: the price history (GET) and a freshly triggered analysis
//! (POST). They run concurrently, settle in either order, and are not
//! coordinated beyond one rule: a request only commits its result while the
//! selection it was issued for is still the live one. Every `select_ticker`
//! call bumps an epoch; each spawned fetch captures the value it was issued
//! under and compares against the live value before touching state, so a
//! late response for a superseded ticker is dropped without a trace (beyond
//! a debug log). Stale requests are not aborted at the transport level, and
//! no timeout is imposed here; a request that never resolves leaves its
//! loading flag set.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

use realticker_rs::analysis::models::StockAnalysis;
use realticker_rs::stocks::models::PricePoint;
use realticker_rs::{RealtickerClient, RealtickerError};

use crate::series;
use crate::state::Shared;
use crate::state::selection::SelectionState;
use crate::types::FetchKind;

/// The two ticker-scoped calls the session needs from the service,
/// injected so tests can drive it with a scripted feed.
#[async_trait]
pub trait StockFeed: Send + Sync {
    async fn fetch_history(&self, ticker: &str) -> Result<Vec<PricePoint>, RealtickerError>;

    /// Triggers a recompute on the service side; not idempotent.
    async fn request_analysis(&self, ticker: &str) -> Result<StockAnalysis, RealtickerError>;
}

#[async_trait]
impl StockFeed for RealtickerClient {
    async fn fetch_history(&self, ticker: &str) -> Result<Vec<PricePoint>, RealtickerError> {
        Ok(self.get_stock_history(ticker).await?.history)
    }

    async fn request_analysis(&self, ticker: &str) -> Result<StockAnalysis, RealtickerError> {
        self.analyze_stock(ticker).await
    }
}

pub struct SelectionSession {
    shared: Shared,
    feed: Arc<dyn StockFeed>,
    display_months: usize,
}

impl SelectionSession {
    pub fn new(shared: Shared, feed: Arc<dyn StockFeed>, display_months: usize) -> Self {
        Self {
            shared,
            feed,
            display_months,
        }
    }

    /// The sole mutation entry point. `None` clears the selection; `Some`
    /// replaces it wholesale and starts the two fetches. Either way the
    /// epoch moves first, so anything still in flight for the previous
    /// selection is already dead by the time the state resets.
    pub async fn select_ticker(&self, ticker: Option<String>) {
        let epoch = self.shared.next_epoch();

        let Some(ticker) = ticker else {
            *self.shared.selection.write().await = SelectionState::default();
            self.shared.notify.notify_one();
            info!(epoch, "selection cleared");
            return;
        };

        *self.shared.selection.write().await = SelectionState::loading(&ticker);
        self.shared.notify.notify_one();
        info!(ticker = %ticker, epoch, "selection changed");

        self.spawn_history(ticker.clone(), epoch);
        self.spawn_analysis(ticker, epoch);
    }

    fn spawn_history(&self, ticker: String, epoch: u64) {
        let shared = self.shared.clone();
        let feed = self.feed.clone();
        let display_months = self.display_months;
        let request_id = Uuid::new_v4();
        info!(ticker = %ticker, %request_id, kind = FetchKind::History.as_str(), "fetch issued");

        tokio::spawn(async move {
            let outcome = feed.fetch_history(&ticker).await;

            // The epoch check and the commit must happen under the same
            // write lock; a selection change always bumps the epoch before
            // it takes this lock to reset state.
            let mut guard = shared.selection.write().await;
            if shared.current_epoch() != epoch {
                debug!(ticker = %ticker, %request_id, "discarding stale history result");
                return;
            }

            match outcome {
                Ok(history) => {
                    let monthly = series::downsample_monthly(&history);
                    match series::summarize(&series::take_last_months(&monthly, display_months)) {
                        Ok(stats) => guard.stats = stats,
                        Err(e) => {
                            warn!(ticker = %ticker, %request_id, "summary rejected: {e}");
                            guard.error = Some(e.to_string());
                        }
                    }
                    guard.history = history;
                    guard.monthly = monthly;
                }
                Err(e) => {
                    warn!(ticker = %ticker, %request_id, "history fetch failed: {e}");
                    guard.error = Some(e.to_string());
                }
            }
            guard.history_loading = false;
            drop(guard);
            shared.notify.notify_one();
        });
    }

    fn spawn_analysis(&self, ticker: String, epoch: u64) {
        let shared = self.shared.clone();
        let feed = self.feed.clone();
        let request_id = Uuid::new_v4();
        info!(ticker = %ticker, %request_id, kind = FetchKind::Analysis.as_str(), "fetch issued");

        tokio::spawn(async move {
            let outcome = feed.request_analysis(&ticker).await;

            let mut guard = shared.selection.write().await;
            if shared.current_epoch() != epoch {
                debug!(ticker = %ticker, %request_id, "discarding stale analysis result");
                return;
            }

            match outcome {
                Ok(analysis) => guard.analysis = Some(analysis),
                Err(e) => {
                    warn!(ticker = %ticker, %request_id, "analysis request failed: {e}");
                    guard.error = Some(e.to_string());
                }
            }
            guard.analysis_loading = false;
            drop(guard);
            shared.notify.notify_one();
        });
    }
}
