//! series.rs
//!
//! The display pipeline for a raw price history:
//!
//! - downsample a daily series to one representative point per calendar month
//! - slice off the trailing months the detail view shows
//! - summarize that slice as start/end/percent-change
//!
//! Everything here is pure; the session feeds it whatever the service
//! returned and renders whatever comes out.

use std::collections::HashMap;

use anyhow::{Result, bail};
use chrono::Datelike;
use realticker_rs::stocks::models::PricePoint;

/// Explicit calendar-month grouping key. Grouping on (year, month) directly
/// rather than a formatted string keeps the tie-breaks independent of any
/// key formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(point: &PricePoint) -> Self {
        Self {
            year: point.date.year(),
            month: point.date.month(),
        }
    }
}

/// Start/end/percent-change over the series exactly as displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub start: f64,
    pub end: f64,
    /// (end - start) / start * 100, rounded to 2 digits half away from zero.
    pub percent_change: f64,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Collapse a daily series to one point per calendar month present in it.
///
/// Within a month the latest date wins. Two points on the identical date
/// resolve to the one seen later in the input; that tie-break depends on the
/// service preserving arrival order, which holds for at most one point per
/// day but is not re-derived from anything authoritative.
///
/// The input may arrive in any order; the output is ascending by date.
/// Empty in, empty out.
pub fn downsample_monthly(series: &[PricePoint]) -> Vec<PricePoint> {
    let mut by_month: HashMap<MonthKey, PricePoint> = HashMap::new();
    for point in series {
        match by_month.get(&MonthKey::of(point)) {
            Some(kept) if kept.date > point.date => {}
            _ => {
                by_month.insert(MonthKey::of(point), point.clone());
            }
        }
    }
    let mut monthly: Vec<PricePoint> = by_month.into_values().collect();
    monthly.sort_by_key(|p| p.date);
    monthly
}

/// The trailing `n` months of an already-downsampled series, in order.
pub fn take_last_months(series: &[PricePoint], n: usize) -> Vec<PricePoint> {
    let skip = series.len().saturating_sub(n);
    series[skip..].to_vec()
}

/// Summarize the series as displayed.
///
/// Under two points there is nothing to change between, so the stats are
/// simply absent. A non-positive start price cannot produce a meaningful
/// percentage; upstream data is assumed positive, and when that assumption
/// breaks this fails as bad data instead of emitting a non-finite value.
pub fn summarize(series: &[PricePoint]) -> Result<Option<SummaryStats>> {
    if series.len() < 2 {
        return Ok(None);
    }
    let first = &series[0];
    let last = &series[series.len() - 1];
    if first.price <= 0.0 {
        bail!("start price {} on {} is not a usable baseline", first.price, first.date);
    }
    Ok(Some(SummaryStats {
        start: first.price,
        end: last.price,
        percent_change: round2((last.price - first.price) / first.price * 100.0),
    }))
}
