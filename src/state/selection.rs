use realticker_rs::analysis::models::StockAnalysis;
use realticker_rs::stocks::models::PricePoint;

use crate::series::SummaryStats;

/// Where the current selection sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

/// Everything the detail view needs for the current selection.
///
/// Replaced wholesale whenever the selection changes; fetches still in
/// flight for an older selection never touch it. The two loading flags and
/// the error slot always describe the current ticker only.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub ticker: Option<String>,

    /// Raw daily series as the service returned it.
    pub history: Vec<PricePoint>,
    /// One point per calendar month, ascending by date.
    pub monthly: Vec<PricePoint>,
    /// Computed over the displayed slice of `monthly`, not over `history`.
    pub stats: Option<SummaryStats>,

    pub analysis: Option<StockAnalysis>,

    pub history_loading: bool,
    pub analysis_loading: bool,

    /// Single generic error slot, last writer wins.
    pub error: Option<String>,
}

impl SelectionState {
    /// Fresh Loading state for a newly selected ticker.
    pub fn loading(ticker: &str) -> Self {
        Self {
            ticker: Some(ticker.to_string()),
            history_loading: true,
            analysis_loading: true,
            ..Self::default()
        }
    }

    /// Derived, not stored: Ready simply means both requests have settled,
    /// each independently with a result or an error.
    pub fn phase(&self) -> Phase {
        if self.ticker.is_none() {
            Phase::Idle
        } else if self.history_loading || self.analysis_loading {
            Phase::Loading
        } else {
            Phase::Ready
        }
    }
}
