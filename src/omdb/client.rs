use async_trait::async_trait;
use std::time::Duration;

/// Status and body of an upstream response, as seen by the lookup service.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The one capability the lookup service needs from the outside world:
/// perform a GET against a fully formed URL and hand back status + body.
/// Implemented by [`OmdbClient`] in production and by in-process doubles
/// in tests.
#[async_trait]
pub trait LookupTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<ApiResponse, TransportError>;
}

/// reqwest-backed transport for the real movie database.
pub struct OmdbClient {
    http: reqwest::Client,
}

impl OmdbClient {
    pub fn new() -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl LookupTransport for OmdbClient {
    async fn get(&self, url: &str) -> Result<ApiResponse, TransportError> {
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}
