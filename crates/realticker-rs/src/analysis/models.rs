//! Analysis module models.
//!
//! This module contains the data structure for the externally generated
//! qualitative analysis. The record is produced on the service side and
//! consumed read-only; the SDK never interprets its fields.

use derive_more::Display;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, Display)]
#[display(
    "{}: trend {}, risk {}, action {}",
    ticker,
    trend,
    risk_level,
    suggested_action
)]


/// Qualitative analysis record for one ticker.
///
pub struct StockAnalysis {
    pub ticker: String,
    pub trend: String,
    pub risk_level: String,
    pub suggested_action: String,
    #[serde(default)]
    pub explanation: Option<String>,
    pub disclaimer: String,
}
