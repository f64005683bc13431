//! Pair-vs-pair compatibility in [0,1]: a weighted sum of level proximity,
//! competitiveness alignment and schedule overlap.

use std::collections::HashSet;

use serde::Serialize;

use crate::engine::canonical::{canonicalize_pair, competitiveness_or_default};
use crate::engine::config::{CompatibilityConfig, FriendlyConfig};
use crate::engine::types::{MatchMode, Pair, PairRecord};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub candidate: Pair,
    pub score: f64,
}

pub fn level_subscore(avg_x: f64, avg_y: f64, config: &CompatibilityConfig) -> f64 {
    let diff = (avg_x - avg_y).abs();
    1.0 - (diff / config.level_tolerance).min(1.0)
}

pub fn competitiveness_subscore(x: &str, y: &str, config: &CompatibilityConfig) -> f64 {
    if competitiveness_or_default(Some(x)) == competitiveness_or_default(Some(y)) {
        1.0
    } else {
        config.competitiveness_mismatch_score
    }
}

pub fn availability_subscore(x: &[String], y: &[String], config: &CompatibilityConfig) -> f64 {
    let x_slots: HashSet<&str> = x.iter().map(String::as_str).collect();
    let y_slots: HashSet<&str> = y.iter().map(String::as_str).collect();
    let overlap = x_slots.intersection(&y_slots).count();
    (overlap as f64 / config.overlap_saturation as f64).min(1.0)
}

pub fn compatibility(x: &Pair, y: &Pair, config: &CompatibilityConfig) -> f64 {
    let level = level_subscore(x.average_score, y.average_score, config);
    let competitiveness = competitiveness_subscore(&x.competitiveness, &y.competitiveness, config);
    let availability = availability_subscore(&x.availability, &y.availability, config);

    let score = config.level_weight * level
        + config.competitiveness_weight * competitiveness
        + config.availability_weight * availability;
    score.clamp(0.0, 1.0)
}

pub fn friendly_remap(score: f64, config: &FriendlyConfig) -> f64 {
    score * config.scale + config.floor
}

/// Scores every candidate except `my_pair` itself and sorts best first.
/// Equal scores keep their input order.
pub fn rank_candidates(
    my_pair: &Pair,
    candidates: &[Pair],
    mode: MatchMode,
    compatibility_config: &CompatibilityConfig,
    friendly_config: &FriendlyConfig,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .filter(|c| c.id != my_pair.id)
        .map(|c| {
            let raw = compatibility(my_pair, c, compatibility_config);
            let score = match mode {
                MatchMode::Friendly => friendly_remap(raw, friendly_config),
                MatchMode::Competitive => raw,
            };
            RankedCandidate {
                candidate: c.clone(),
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// The value persisted on a match record: compatibility of two stored pair
/// rows, rounded to two decimals.
pub fn match_compatibility(a: &PairRecord, b: &PairRecord, config: &CompatibilityConfig) -> f64 {
    let score = compatibility(&canonicalize_pair(a), &canonicalize_pair(b), config);
    round2(score).clamp(0.0, 1.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
