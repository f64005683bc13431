use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_MAX_CANDIDATES;
use crate::engine::types::MatchMode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid matching config: {0}")]
    Invalid(String),
}

/// Additive onboarding heuristic. Max combined bonus is 2.9.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub baseline: f64,
    pub bandeja_bonus: f64,
    pub vibora_bonus: f64,
    pub wall_exit_bonus: f64,
    pub high_walls_bonus: f64,
    pub compete_bonus: f64,
    pub min_level: f64,
    pub max_level: f64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            baseline: 5.0,
            bandeja_bonus: 0.6,
            vibora_bonus: 0.6,
            wall_exit_bonus: 0.5,
            high_walls_bonus: 0.8,
            compete_bonus: 0.4,
            min_level: 1.0,
            max_level: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityConfig {
    /// Level gap at which the level sub-score reaches 0
    pub level_tolerance: f64,
    /// Sub-score when the two pairs declare different competitiveness
    pub competitiveness_mismatch_score: f64,
    /// Shared slots needed for a full availability sub-score
    pub overlap_saturation: u32,
    pub level_weight: f64,
    pub competitiveness_weight: f64,
    pub availability_weight: f64,
}

impl Default for CompatibilityConfig {
    fn default() -> Self {
        Self {
            level_tolerance: 3.0,
            competitiveness_mismatch_score: 0.6,
            overlap_saturation: 3,
            level_weight: 0.5,
            competitiveness_weight: 0.3,
            availability_weight: 0.2,
        }
    }
}

/// `score' = score * scale + floor`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendlyConfig {
    pub scale: f64,
    pub floor: f64,
}

impl Default for FriendlyConfig {
    fn default() -> Self {
        Self {
            scale: 0.8,
            floor: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingConfig {
    pub default_mode: MatchMode,
    pub max_candidates: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_mode: MatchMode::Competitive,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingConfig {
    #[serde(default)]
    pub level: LevelConfig,
    #[serde(default)]
    pub compatibility: CompatibilityConfig,
    #[serde(default)]
    pub friendly: FriendlyConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

impl MatchingConfig {
    pub fn from_env(env_config: &crate::config::EngineEnvConfig) -> Self {
        let mut config = Self::default();
        config.ranking.default_mode = env_config.default_mode;
        config.ranking.max_candidates = env_config.max_candidates;
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.level.min_level >= self.level.max_level {
            return invalid("level.min_level must be < level.max_level");
        }
        if !(self.level.min_level..=self.level.max_level).contains(&self.level.baseline) {
            return invalid("level.baseline must lie within [min_level, max_level]");
        }

        let c = &self.compatibility;
        if c.level_tolerance <= 0.0 {
            return invalid("compatibility.level_tolerance must be > 0");
        }
        if c.overlap_saturation == 0 {
            return invalid("compatibility.overlap_saturation must be > 0");
        }
        if !(0.0..=1.0).contains(&c.competitiveness_mismatch_score) {
            return invalid("compatibility.competitiveness_mismatch_score must be in [0,1]");
        }
        if c.level_weight < 0.0 || c.competitiveness_weight < 0.0 || c.availability_weight < 0.0 {
            return invalid("compatibility weights must be >= 0");
        }
        let weight_sum = c.level_weight + c.competitiveness_weight + c.availability_weight;
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::Invalid(format!(
                "compatibility weights should sum to ~1.0 (got {weight_sum:.3})"
            )));
        }

        let f = &self.friendly;
        if f.scale <= 0.0 || f.floor < 0.0 {
            return invalid("friendly.scale must be > 0 and friendly.floor >= 0");
        }
        if (f.scale + f.floor - 1.0).abs() > 1e-9 {
            return invalid("friendly.scale + friendly.floor must equal 1.0");
        }

        if self.ranking.max_candidates == 0 {
            return invalid("ranking.max_candidates must be > 0");
        }

        Ok(())
    }
}
