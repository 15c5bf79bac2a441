//! Ranked stock listing and per-ticker price history.

pub mod endpoints;
pub mod models;
