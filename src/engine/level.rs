//! Level estimate from onboarding answers: a baseline plus fixed bonuses for
//! a handful of advanced signals, clamped to the configured bounds.

use crate::engine::canonical::{canonicalize_answers, Objective, OnboardingProfile, Shot, WallSkill};
use crate::engine::config::LevelConfig;
use crate::engine::types::OnboardingAnswers;

pub fn estimate_level(answers: &OnboardingAnswers, config: &LevelConfig) -> f64 {
    score_profile(&canonicalize_answers(answers), config)
}

pub fn score_profile(profile: &OnboardingProfile, config: &LevelConfig) -> f64 {
    let mut level = config.baseline;

    if profile.shots.contains(Shot::Bandeja) {
        level += config.bandeja_bonus;
    }
    if profile.shots.contains(Shot::Vibora) {
        level += config.vibora_bonus;
    }
    if profile.shots.contains(Shot::WallExit) {
        level += config.wall_exit_bonus;
    }
    if profile.walls == WallSkill::High {
        level += config.high_walls_bonus;
    }
    if profile.objective == Objective::Compete {
        level += config.compete_bonus;
    }

    // max/min instead of clamp: clamp panics on inverted bounds
    level.max(config.min_level).min(config.max_level)
}
