use axum::{extract::Request, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::movies::MovieService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub movies: Arc<MovieService>,
}

impl AppState {
    pub fn new(config: Config, movies: Arc<MovieService>) -> Self {
        Self {
            config: Arc::new(config),
            movies,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/reelreflection/getmoviebytitle/:title",
            get(crate::api::get_movie_by_title),
        )
        .route(
            "/api/reelreflection/getmoviebyid/:id",
            get(crate::api::get_movie_by_id),
        )
        .route(
            "/api/reelreflection/searchhistory",
            get(crate::api::search_history),
        )
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    // Answer OPTIONS so preflight succeeds on unmatched paths
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
