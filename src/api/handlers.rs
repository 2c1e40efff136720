use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::movies::LookupError;
use crate::omdb::Movie;
use crate::server::AppState;

pub async fn get_movie_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Movie>, StatusCode> {
    match state.movies.lookup_by_title(&title).await {
        Ok(Some(movie)) => Ok(Json(movie)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            warn!(title = %title, error = %e, "title lookup failed");
            Err(upstream_status(&e))
        }
    }
}

pub async fn get_movie_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, StatusCode> {
    match state.movies.lookup_by_id(&id).await {
        Ok(Some(movie)) => Ok(Json(movie)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            warn!(id = %id, error = %e, "id lookup failed");
            Err(upstream_status(&e))
        }
    }
}

/// The history endpoint takes no parameters; any query string a caller
/// sends is ignored.
pub async fn search_history(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.movies.search_history().await)
}

fn upstream_status(error: &LookupError) -> StatusCode {
    match error {
        LookupError::Transport(_) => StatusCode::BAD_GATEWAY,
        LookupError::InvalidBody(_) => StatusCode::BAD_GATEWAY,
    }
}
