use axum::extract::State;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;

use crate::engine::lenient;
use crate::engine::types::PlayerRecord;
use crate::extractors::JsonBody;
use crate::response::{created, AppError};
use crate::state::AppState;
use crate::validation::validate_record_id;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_pair))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePairRequest {
    player_a: PlayerRecord,
    player_b: PlayerRecord,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    temporary: Option<bool>,
}

async fn create_pair(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePairRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    for player in [&req.player_a, &req.player_b] {
        validate_record_id(&player.id)
            .map_err(|msg| AppError::bad_request("INVALID_PLAYER_ID", msg))?;
    }
    if req.player_a.id == req.player_b.id {
        return Err(AppError::bad_request(
            "SAME_PLAYER",
            "a pair needs two different players",
        ));
    }

    let pair = state
        .engine()
        .make_pair(&req.player_a, &req.player_b, req.temporary.unwrap_or(false));
    tracing::debug!(pair_id = %pair.id, average = pair.average_score, "Synthesized pair");
    Ok(created(pair))
}
