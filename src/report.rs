// src/report.rs
use tracing::info;

use realticker_rs::stocks::models::StockSummary;

use crate::state::selection::{Phase, SelectionState};

/// Compact volume column: 51_230_000 -> "51.23M".
fn format_count(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

fn format_signed_pct(x: f64) -> String {
    if x >= 0.0 {
        format!("+{x:.2}%")
    } else {
        format!("{x:.2}%")
    }
}

pub fn print_rankings(rows: &[StockSummary]) {
    println!("{:<8} {:<28} {:>10} {:>9} {:>10}", "Ticker", "Company", "Price", "Change", "Volume");
    for row in rows {
        println!(
            "{:<8} {:<28} {:>10} {:>9} {:>10}",
            row.ticker,
            row.company,
            format!("${:.2}", row.price),
            format_signed_pct(row.change),
            format_count(row.volume),
        );
    }
}

/// Detail view for a settled selection. The error banner renders alongside
/// whatever data did arrive; the two requests succeed or fail independently.
pub fn print_selection(state: &SelectionState) {
    let Some(ticker) = state.ticker.as_deref() else {
        return;
    };
    println!("\n{ticker} - last {} months", state.monthly.len().min(6));

    if let Some(error) = &state.error {
        println!("  ! {error}");
    }

    for point in state.monthly.iter().rev().take(6).rev() {
        println!("  {}  ${:.2}", point.date, point.price);
    }
    if let Some(stats) = &state.stats {
        println!(
            "  Start: ${:.2}  End: ${:.2}  Change: {}",
            stats.start,
            stats.end,
            format_signed_pct(stats.percent_change),
        );
    }

    if let Some(analysis) = &state.analysis {
        println!("  Trend: {}", analysis.trend);
        println!("  Risk: {}", analysis.risk_level);
        println!("  Suggested action: {}", analysis.suggested_action);
        if let Some(explanation) = &analysis.explanation {
            println!("  {explanation}");
        }
        println!("  {}", analysis.disclaimer);
    }
    println!();
}

pub fn log_selection(state: &SelectionState) {
    info!(
        ticker = ?state.ticker,
        phase = ?state.phase(),
        history_points = state.history.len(),
        monthly_points = state.monthly.len(),
        stats = ?state.stats,
        has_analysis = state.analysis.is_some(),
        error = ?state.error,
        "selection snapshot"
    );
}

// Loading feedback between the Loading and Ready notifications.
pub fn print_progress(state: &SelectionState) {
    if state.phase() == Phase::Loading {
        if let Some(ticker) = state.ticker.as_deref() {
            let mut waiting = Vec::new();
            if state.history_loading {
                waiting.push("history");
            }
            if state.analysis_loading {
                waiting.push("analysis");
            }
            println!("{ticker}: waiting on {}...", waiting.join(" + "));
        }
    }
}
