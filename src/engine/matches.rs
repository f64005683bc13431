use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::compatibility::match_compatibility;
use crate::engine::config::CompatibilityConfig;
use crate::engine::lenient;
use crate::engine::types::{MatchMode, PairRecord};
use crate::validation::parse_schedule;

/// Drafts are always created pending; later states belong to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("a pair cannot play against itself")]
    SamePair,
    #[error("both pairs must have an id")]
    MissingPairId,
}

/// What a player submits when proposing a match.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchProposal {
    pub pair_a: PairRecord,
    pub pair_b: PairRecord,
    pub mode: Option<MatchMode>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:MM`
    pub time: Option<String>,
}

/// A match record ready to be inserted. The compatibility value is stamped
/// once here and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDraft {
    pub pair_a_id: String,
    pub pair_b_id: String,
    pub location: Option<String>,
    pub scheduled_at: Option<NaiveDateTime>,
    pub mode: MatchMode,
    pub competitiveness_score: f64,
    pub status: MatchStatus,
}

pub fn draft_match(
    proposal: &MatchProposal,
    default_mode: MatchMode,
    config: &CompatibilityConfig,
) -> Result<MatchDraft, MatchError> {
    let a_id = proposal.pair_a.id.trim();
    let b_id = proposal.pair_b.id.trim();
    if a_id.is_empty() || b_id.is_empty() {
        return Err(MatchError::MissingPairId);
    }
    if a_id == b_id {
        return Err(MatchError::SamePair);
    }

    let location = proposal
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string);

    let scheduled_at = match (proposal.date.as_deref(), proposal.time.as_deref()) {
        (Some(date), Some(time)) => parse_schedule(date, time),
        _ => None,
    };

    Ok(MatchDraft {
        pair_a_id: a_id.to_string(),
        pair_b_id: b_id.to_string(),
        location,
        scheduled_at,
        mode: proposal.mode.unwrap_or(default_mode),
        competitiveness_score: match_compatibility(&proposal.pair_a, &proposal.pair_b, config),
        status: MatchStatus::Pending,
    })
}
