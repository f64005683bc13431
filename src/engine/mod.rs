pub mod candidates;
pub mod canonical;
pub mod compatibility;
pub mod config;
pub mod feedback;
pub mod identity;
pub mod insights;
pub mod lenient;
pub mod level;
pub mod matches;
pub mod pair;
pub mod types;

use std::sync::Arc;

use crate::engine::compatibility::RankedCandidate;
use crate::engine::config::MatchingConfig;
use crate::engine::matches::{MatchDraft, MatchError, MatchProposal};
use crate::engine::types::{MatchMode, OnboardingAnswers, Pair, PairRecord, PlayerRecord};

/// Holds the immutable matching config and exposes each scoring operation
/// with its sub-config already applied.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    config: Arc<MatchingConfig>,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn estimate_level(&self, answers: &OnboardingAnswers) -> f64 {
        let level = level::estimate_level(answers, &self.config.level);
        tracing::debug!(estimated = level, "Estimated onboarding level");
        level
    }

    pub fn make_pair(&self, a: &PlayerRecord, b: &PlayerRecord, temporary: bool) -> Pair {
        pair::make_pair(a, b, temporary)
    }

    pub fn compatibility(&self, x: &Pair, y: &Pair) -> f64 {
        compatibility::compatibility(x, y, &self.config.compatibility)
    }

    pub fn match_compatibility(&self, a: &PairRecord, b: &PairRecord) -> f64 {
        compatibility::match_compatibility(a, b, &self.config.compatibility)
    }

    /// `mode` falls back to the configured default.
    pub fn rank_candidates(
        &self,
        my_pair: &Pair,
        candidates: &[Pair],
        mode: Option<MatchMode>,
    ) -> Vec<RankedCandidate> {
        let mode = mode.unwrap_or(self.config.ranking.default_mode);
        let ranked = compatibility::rank_candidates(
            my_pair,
            candidates,
            mode,
            &self.config.compatibility,
            &self.config.friendly,
        );
        tracing::debug!(
            pair_id = %my_pair.id,
            %mode,
            candidates = candidates.len(),
            ranked = ranked.len(),
            "Ranked opponent candidates"
        );
        ranked
    }

    pub fn draft_match(&self, proposal: &MatchProposal) -> Result<MatchDraft, MatchError> {
        let draft = matches::draft_match(
            proposal,
            self.config.ranking.default_mode,
            &self.config.compatibility,
        )?;
        tracing::debug!(
            pair_a = %draft.pair_a_id,
            pair_b = %draft.pair_b_id,
            score = draft.competitiveness_score,
            "Drafted match"
        );
        Ok(draft)
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}
