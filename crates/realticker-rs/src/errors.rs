use std::fmt;
#[derive(Debug)]
pub enum RealtickerError {
    /// The request never completed or the transport failed.
    RequestError(reqwest::Error),
    /// The response body did not match the documented wire shape.
    ParseError(serde_json::Error),
    /// The response parsed but carried values the API contract rules out
    /// (negative prices and the like).
    InvalidData(String),
    Other(String),
}
impl fmt::Display for RealtickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealtickerError::RequestError(e) => write!(f, "Request error: {}", e),
            RealtickerError::ParseError(e) => write!(f, "Parse error: {}", e),
            RealtickerError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            RealtickerError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}
impl std::error::Error for RealtickerError {}
impl From<reqwest::Error> for RealtickerError {
    fn from(err: reqwest::Error) -> Self {
        RealtickerError::RequestError(err)
    }
}
impl From<serde_json::Error> for RealtickerError {
    fn from(err: serde_json::Error) -> Self {
        RealtickerError::ParseError(err)
    }
}
impl From<String> for RealtickerError {
    fn from(s: String) -> RealtickerError {
        RealtickerError::Other(s)
    }
}
