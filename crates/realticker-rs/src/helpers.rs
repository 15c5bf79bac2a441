use crate::errors::RealtickerError;
use reqwest::Client;
/// Helper functions for issuing requests against the stock service.
/// The service exposes no authentication, so these only join the base
/// origin with a path and normalize non-success statuses into errors.
use url::Url;

pub(crate) fn join_url(base_url: &str, path: &str) -> Result<Url, RealtickerError> {
    let base = base_url.trim_end_matches('/');
    let url = format!("{}{}", base, path);
    Url::parse(&url).map_err(|e| RealtickerError::Other(e.to_string()))
}


/// Make a GET request.
pub(crate) async fn get(
    http_client: &Client,
    base_url: &str,
    path: &str,
) -> Result<String, RealtickerError> {
    let url = join_url(base_url, path)?;
    let resp = http_client.get(url.as_str()).send().await?;
    let status = resp.status();
    let body: String = resp.text().await?;
    if !status.is_success() {
        return Err(RealtickerError::Other(format!("HTTP {}: {}", status, body)));
    }
    Ok(body)
}


/// Make a POST request with an optional JSON body.
pub(crate) async fn post<T>(
    http_client: &Client,
    base_url: &str,
    path: &str,
    json_body: Option<&T>,
) -> Result<String, RealtickerError>
where
    T: serde::Serialize + ?Sized,
{
    let url = join_url(base_url, path)?;
    let mut request = http_client.post(url.as_str());
    if let Some(body) = json_body {
        request = request.json(body);
    }
    let resp = request.send().await?;
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(RealtickerError::Other(format!("HTTP {}: {}", status, text)));
    }
    Ok(text)
}
