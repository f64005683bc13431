use axum::extract::State;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;

use crate::engine::candidates::{candidate_pool, resolve_my_pair};
use crate::engine::canonical::canonicalize_pair;
use crate::engine::lenient;
use crate::engine::matches::MatchProposal;
use crate::engine::types::{MatchMode, Pair, PairRecord};
use crate::extractors::JsonBody;
use crate::response::{created, ok, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/compatibility", post(compatibility))
        .route("/candidates", post(candidates))
        .route("/draft", post(draft))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompatibilityRequest {
    pair_a: PairRecord,
    pair_b: PairRecord,
}

async fn compatibility(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CompatibilityRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let score = state.engine().match_compatibility(&req.pair_a, &req.pair_b);
    Ok(ok(serde_json::json!({ "score": score })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidatesRequest {
    my_pair: Option<PairRecord>,
    #[serde(default)]
    pairs: Vec<PairRecord>,
    mode: Option<MatchMode>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    viewer_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    partner_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    city: Option<String>,
}

async fn candidates(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CandidatesRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let max = state.max_candidates();
    if req.pairs.len() > max {
        return Err(AppError::bad_request(
            "TOO_MANY_CANDIDATES",
            &format!("at most {max} pairs can be ranked per request"),
        ));
    }

    let pairs: Vec<Pair> = req.pairs.iter().map(canonicalize_pair).collect();
    let viewer_id = req.viewer_id.as_deref();

    let my_pair = match &req.my_pair {
        Some(record) => canonicalize_pair(record),
        None => {
            let viewer = viewer_id.ok_or_else(|| {
                AppError::bad_request("MISSING_PAIR_ID", "myPair or viewerId is required")
            })?;
            resolve_my_pair(&pairs, viewer, req.partner_id.as_deref())
                .cloned()
                .ok_or_else(|| AppError::not_found("PAIR_NOT_FOUND", "player has no pair"))?
        }
    };

    let pool = candidate_pool(&my_pair, &pairs, viewer_id, req.city.as_deref());
    let mode = req.mode.unwrap_or(state.engine().config().ranking.default_mode);
    let ranked = state.engine().rank_candidates(&my_pair, &pool, Some(mode));

    Ok(ok(serde_json::json!({
        "myPairId": my_pair.id,
        "mode": mode,
        "candidates": ranked,
    })))
}

async fn draft(
    State(state): State<AppState>,
    JsonBody(proposal): JsonBody<MatchProposal>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let draft = state.engine().draft_match(&proposal)?;
    Ok(created(draft))
}
