//! Realticker Rust SDK
//!
//! Client library for the realticker stock ranking service HTTP API.
//! Provides the ranked stock listing, six-month daily price history, and
//! server-side qualitative analysis for a ticker.
//!
//! # Quick Start
//!
//! ```no_run
//! use realticker_rs::RealtickerClient;
//! use realticker_rs::stocks::models::{RankBy, TopStocksQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Create a client (pass Some(origin) to target a non-default server)
//! let client = RealtickerClient::new();
//!
//! // 2. Use the client to call API endpoints
//! let stocks = client.get_top_stocks(&TopStocksQuery {
//!     by: Some(RankBy::Volume),
//! }).await?;
//!
//! println!("Found {} stocks", stocks.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`RealtickerClient`] - Main client with all API endpoint methods
//! - [`RealtickerError`] - Error type shared by every endpoint
//!
//! # API Endpoint Modules
//!
//! - [`stocks`] - Ranked listing and per-ticker price history
//! - [`analysis`] - Server-side qualitative analysis
//!
//! All endpoint methods are implemented on [`RealtickerClient`].


// Core modules
pub mod client;         // Main HTTP client
pub mod errors;         // Error types
pub(crate) mod helpers; // Internal HTTP helpers


// API endpoint modules
pub mod analysis;   // Qualitative per-ticker analysis
pub mod stocks;     // Rankings and price history


// Re-exports for convenient access
pub use client::RealtickerClient;
pub use errors::RealtickerError;
