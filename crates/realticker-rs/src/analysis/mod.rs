//! Server-side qualitative analysis of a ticker.

pub mod endpoints;
pub mod models;
