mod config;
mod report;
mod series;
mod session;
mod state;
mod types;

use anyhow::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use std::env;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};

use realticker_rs::RealtickerClient;
use realticker_rs::stocks::models::TopStocksQuery;

use config::Config;
use session::SelectionSession;
use state::Shared;
use state::selection::Phase;
use types::UiCommand;

#[tokio::main]
async fn main() -> Result<()> {
    // Basic logging: set RUST_LOG=info (or debug) to see output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenv().ok();

    let mut cfg = Config::default();
    if let Ok(base) = env::var("REALTICKER_API") {
        cfg.api_base = base;
    }

    let client = Arc::new(RealtickerClient::new_with_config(Some(cfg.api_base.clone())));

    // Startup listing: plain fetch-and-render. A failure here is reported
    // and tickers can still be selected by hand.
    match client
        .get_top_stocks(&TopStocksQuery { by: Some(cfg.rank_by) })
        .await
    {
        Ok(rows) => report::print_rankings(&rows),
        Err(e) => warn!("rankings fetch failed: {e}"),
    }

    let shared = Shared::new();
    let session = SelectionSession::new(shared.clone(), client, cfg.display_months);

    println!("enter a ticker to inspect it, 'clear' to deselect, 'q' to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Ok(Some(line)) = line else { break; };
                match types::parse_command(&line) {
                    UiCommand::Quit => break,
                    UiCommand::Clear => session.select_ticker(None).await,
                    UiCommand::Select(ticker) => session.select_ticker(Some(ticker)).await,
                }
            }

            _ = shared.notify.notified() => {
                let snap = shared.snapshot().await;
                report::log_selection(&snap);
                match snap.phase() {
                    Phase::Ready => report::print_selection(&snap),
                    Phase::Loading => report::print_progress(&snap),
                    Phase::Idle => {}
                }
            }
        }
    }

    // Drop the selection on the way out so nothing in flight commits late.
    session.select_ticker(None).await;
    Ok(())
}
