use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/live", get(liveness))
        .route("/ready", get(readiness))
}

pub async fn health_check(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let ranking = &state.engine().config().ranking;
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptimeSecs": state.uptime_secs(),
        "engine": {
            "defaultMode": ranking.default_mode,
            "maxCandidates": ranking.max_candidates,
        }
    }))
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.engine().config().validate() {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!(error = %e, "Engine config invalid, reporting not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
