use axum::extract::State;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;

use crate::engine::identity::{derive_nickname, derive_signature_shot};
use crate::engine::insights::{player_insights, AggregateRow};
use crate::engine::types::{FeedbackEntry, OnboardingAnswers, PlayerRecord};
use crate::extractors::JsonBody;
use crate::response::{ok, AppError};
use crate::state::AppState;
use crate::validation::validate_onboarding_level;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/level", post(estimate_level))
        .route("/identity", post(identity))
        .route("/insights", post(insights))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LevelRequest {
    #[serde(flatten)]
    answers: OnboardingAnswers,
    self_reported_level: Option<f64>,
}

async fn estimate_level(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LevelRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if let Some(level) = req.self_reported_level {
        validate_onboarding_level(level)
            .map_err(|msg| AppError::bad_request("LEVEL_OUT_OF_RANGE", msg))?;
    }

    let level = state.engine().estimate_level(&req.answers);
    Ok(ok(serde_json::json!({
        "level": level,
        "selfReportedLevel": req.self_reported_level,
    })))
}

async fn identity(
    JsonBody(player): JsonBody<PlayerRecord>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    Ok(ok(serde_json::json!({
        "playerId": player.id,
        "nickname": derive_nickname(&player),
        "signatureShot": derive_signature_shot(&player),
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsightsRequest {
    player: PlayerRecord,
    #[serde(default)]
    feedback: Vec<FeedbackEntry>,
    aggregate: Option<AggregateRow>,
}

async fn insights(
    JsonBody(req): JsonBody<InsightsRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    // entries about other players are ignored when the player has an id
    let player_id = req.player.id.trim();
    let about_player: Vec<FeedbackEntry> = if player_id.is_empty() {
        req.feedback
    } else {
        req.feedback
            .into_iter()
            .filter(|f| f.about_player.trim() == player_id)
            .collect()
    };

    let insights = player_insights(&req.player, &about_player, req.aggregate.as_ref());
    tracing::debug!(
        player_id = %player_id,
        count = insights.count,
        precomputed = req.aggregate.is_some(),
        "Built player insights"
    );
    Ok(ok(insights))
}
