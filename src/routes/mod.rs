pub mod feedback;
pub mod health;
pub mod matches;
pub mod pairs;
pub mod players;

use axum::extract::DefaultBodyLimit;
use axum::http::Uri;
use axum::Router;

use crate::middleware::request_id;
use crate::response::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config().max_body_bytes;

    let api_routes = Router::new()
        .nest("/players", players::router())
        .nest("/pairs", pairs::router())
        .nest("/matches", matches::router())
        .nest("/feedback", feedback::router())
        .layer(DefaultBodyLimit::max(body_limit));

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health::router())
        .fallback(fallback_404)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .with_state(state)
}

async fn fallback_404(uri: Uri) -> AppError {
    AppError::not_found("NOT_FOUND", &format!("no route for {}", uri.path()))
}
