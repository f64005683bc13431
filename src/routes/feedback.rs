use axum::routing::post;
use axum::Router;
use serde::Deserialize;

use crate::engine::feedback::{aggregate, top_and_bottom, validate_submission};
use crate::engine::types::FeedbackEntry;
use crate::extractors::JsonBody;
use crate::response::{ok, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/aggregate", post(aggregate_feedback))
        .route("/validate", post(validate_feedback))
}

#[derive(Debug, Deserialize)]
struct AggregateRequest {
    #[serde(default)]
    entries: Vec<FeedbackEntry>,
}

async fn aggregate_feedback(
    JsonBody(req): JsonBody<AggregateRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let summary = aggregate(&req.entries);
    let extremes = top_and_bottom(&summary.averages);
    Ok(ok(serde_json::json!({
        "averages": summary.averages,
        "count": summary.count,
        "top2": extremes.top2,
        "bottom2": extremes.bottom2,
    })))
}

async fn validate_feedback(
    JsonBody(mut entry): JsonBody<FeedbackEntry>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    validate_submission(&entry)?;
    entry.about_player = entry.about_player.trim().to_string();
    entry.notes = entry
        .notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    Ok(ok(entry))
}
