use realticker_rs::stocks::models::RankBy;

/// Client tuning parameters.
///
/// Defaults target the local development service; the API origin is the only
/// knob most deployments override (via the REALTICKER_API env var in main).
#[derive(Debug, Clone)]
pub struct Config {
    // Base origin of the stock service, scheme + host + port.
    pub api_base: String,

    // Sort key for the startup top-10 listing.
    pub rank_by: RankBy,

    // How many trailing months of the downsampled series are displayed.
    // The service serves up to 6 months of history, so 6 shows everything.
    pub display_months: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8000".to_string(),

            rank_by: RankBy::Volume,

            display_months: 6,
        }
    }
}
