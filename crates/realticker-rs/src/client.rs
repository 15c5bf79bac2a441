use crate::errors::RealtickerError;
use crate::helpers;
use reqwest::Client;


// Stock service base URL for local development
const REALTICKER_API: &str = "http://127.0.0.1:8000/";


/// Main client for interacting with the realticker stock service.
///
/// The `RealtickerClient` provides access to all service endpoints organized
/// by category. Create a client with [`RealtickerClient::new`] and use the
/// various methods to interact with the API.
///
/// # Available Endpoint Categories
///
/// ## Stocks
/// - [`get_top_stocks`](RealtickerClient::get_top_stocks) - Ranked top-10 listing
/// - [`get_stock_history`](RealtickerClient::get_stock_history) - Six-month daily price history
///
/// ## Analysis
/// - [`analyze_stock`](RealtickerClient::analyze_stock) - Trigger a qualitative analysis
///
/// # Example
/// ```no_run
/// use realticker_rs::RealtickerClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Initialize client against a non-default origin
/// let client = RealtickerClient::new_with_config(Some("http://stocks.internal:8000".to_string()));
///
/// // Fetch a ticker's history
/// let history = client.get_stock_history("AAPL").await?;
/// println!("{} points", history.history.len());
/// # Ok(())
/// # }
/// ```
pub struct RealtickerClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: String,
}


impl RealtickerClient {
    /// Create a new RealtickerClient with the default API endpoint
    pub fn new() -> RealtickerClient {
        RealtickerClient {
            http_client: Client::new(),
            base_url: REALTICKER_API.to_string(),
        }
    }


    /// Create a new RealtickerClient with a custom API endpoint
    /// Useful for testing or pointing at a deployed service
    pub fn new_with_config(configuration: Option<String>) -> RealtickerClient {
        RealtickerClient {
            http_client: Client::new(),
            base_url: configuration.unwrap_or_else(|| REALTICKER_API.to_string()),
        }
    }


    /// Wrapper for GET requests
    pub async fn get(&self, path: &str) -> Result<String, RealtickerError> {
        helpers::get(&self.http_client, &self.base_url, path).await
    }


    /// Wrapper for POST requests
    pub async fn post<T>(
        &self,
        path: &str,
        json_body: Option<&T>,
    ) -> Result<String, RealtickerError>
    where
        T: serde::Serialize + ?Sized,
    {
        helpers::post(&self.http_client, &self.base_url, path, json_body).await
    }
}


impl Default for RealtickerClient {
    fn default() -> Self {
        Self::new()
    }
}
