use std::sync::Arc;
use tracing::debug;

use crate::config::OmdbConfig;
use crate::omdb::{decode_movie, LookupTransport, Movie, TransportError};

use super::history::SearchHistory;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("upstream returned an invalid movie body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Orchestrates transport → decoder → history for movie lookups.
///
/// A non-success upstream status is a lookup miss (`Ok(None)`), never an
/// error. Only title searches land in the history; identifier lookups are
/// deliberately untracked.
pub struct MovieService {
    api: OmdbConfig,
    transport: Arc<dyn LookupTransport>,
    history: SearchHistory,
}

impl MovieService {
    pub fn new(api: OmdbConfig, transport: Arc<dyn LookupTransport>) -> Self {
        Self {
            api,
            transport,
            history: SearchHistory::new(),
        }
    }

    pub async fn lookup_by_title(&self, title: &str) -> Result<Option<Movie>, LookupError> {
        let url = self.query_url("t", title);
        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            debug!(title = %title, status = response.status, "title lookup miss");
            return Ok(None);
        }

        let movie = decode_movie(&response.body)?;
        self.history.record(movie.clone()).await;
        Ok(Some(movie))
    }

    pub async fn lookup_by_id(&self, id: &str) -> Result<Option<Movie>, LookupError> {
        let url = self.query_url("i", id);
        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            debug!(id = %id, status = response.status, "id lookup miss");
            return Ok(None);
        }

        let movie = decode_movie(&response.body)?;
        Ok(Some(movie))
    }

    pub async fn search_history(&self) -> Vec<Movie> {
        self.history.snapshot().await
    }

    fn query_url(&self, param: &str, value: &str) -> String {
        format!(
            "{}?{}={}&apikey={}",
            self.api.url,
            param,
            urlencoding::encode(value),
            urlencoding::encode(&self.api.apikey)
        )
    }
}
