//! Input normalization. Every public engine operation runs its raw records
//! through here once, so the scoring code only ever sees defaulted values.

use std::collections::{BTreeSet, HashSet};

use crate::constants::{DEFAULT_COMPETITIVENESS, DEFAULT_LEVEL};
use crate::engine::types::{OnboardingAnswers, Pair, PairRecord, PlayerRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shot {
    Bandeja,
    Vibora,
    WallExit,
    Smash,
    Chiquita,
    Lob,
}

impl Shot {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "bandeja" => Some(Shot::Bandeja),
            "vibora" | "víbora" => Some(Shot::Vibora),
            "wall-exit" | "salida-pared" => Some(Shot::WallExit),
            "smash" => Some(Shot::Smash),
            "chiquita" => Some(Shot::Chiquita),
            "lob" | "globo" => Some(Shot::Lob),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotSet(BTreeSet<Shot>);

impl ShotSet {
    pub fn from_raw(raw: &[String]) -> Self {
        Self(raw.iter().filter_map(|s| Shot::parse(s)).collect())
    }

    pub fn contains(&self, shot: Shot) -> bool {
        self.0.contains(&shot)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WallSkill {
    Low,
    #[default]
    Medium,
    High,
}

impl WallSkill {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("low") | Some("bajo") => WallSkill::Low,
            Some("high") | Some("alto") => WallSkill::High,
            _ => WallSkill::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Attitude {
    Intense,
    Calm,
    #[default]
    Balanced,
}

impl Attitude {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("intense") | Some("intenso") => Attitude::Intense,
            Some("calm") | Some("tranquilo") => Attitude::Calm,
            _ => Attitude::Balanced,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Objective {
    Compete,
    #[default]
    Other,
}

impl Objective {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("compete") | Some("competir") => Objective::Compete,
            _ => Objective::Other,
        }
    }
}

/// Signals the level estimator reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingProfile {
    pub shots: ShotSet,
    pub walls: WallSkill,
    pub objective: Objective,
}

/// Traits behind the nickname and signature shot labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityTraits {
    pub shots: ShotSet,
    pub walls: WallSkill,
    pub attitude: Attitude,
}

/// What the pair synthesizer needs from a player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub id: String,
    pub level: f64,
    pub competitiveness: String,
    pub availability: Vec<String>,
    pub city: String,
}

pub fn canonicalize_answers(answers: &OnboardingAnswers) -> OnboardingProfile {
    OnboardingProfile {
        shots: ShotSet::from_raw(answers.shots.as_deref().unwrap_or_default()),
        walls: WallSkill::parse(answers.walls.as_deref()),
        objective: Objective::parse(answers.objective.as_deref()),
    }
}

pub fn canonicalize_traits(player: &PlayerRecord) -> IdentityTraits {
    IdentityTraits {
        shots: ShotSet::from_raw(player.shots.as_deref().unwrap_or_default()),
        walls: WallSkill::parse(player.walls.as_deref()),
        attitude: Attitude::parse(player.attitude.as_deref()),
    }
}

pub fn canonicalize_player(player: &PlayerRecord) -> PlayerProfile {
    PlayerProfile {
        id: player.id.clone(),
        level: player.level.unwrap_or(DEFAULT_LEVEL),
        competitiveness: competitiveness_or_default(player.competitiveness.as_deref()),
        availability: dedup_slots(player.availability.as_deref().unwrap_or_default()),
        city: trimmed(player.city.as_deref()),
    }
}

pub fn canonicalize_pair(record: &PairRecord) -> Pair {
    Pair {
        id: record.id.clone(),
        player1_id: trimmed(record.player1_id.as_deref()),
        player2_id: trimmed(record.player2_id.as_deref()),
        average_score: record.average_score.unwrap_or(DEFAULT_LEVEL),
        competitiveness: competitiveness_or_default(record.competitiveness.as_deref()),
        availability: dedup_slots(record.availability.as_deref().unwrap_or_default()),
        location: trimmed(record.location.as_deref()),
        temporary: record.temporary.unwrap_or(false),
    }
}

pub fn competitiveness_or_default(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_COMPETITIVENESS.to_string(),
    }
}

/// Removes duplicate and blank slots, keeping first-seen order.
pub fn dedup_slots(slots: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    slots
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_string()))
        .map(str::to_string)
        .collect()
}

fn trimmed(raw: Option<&str>) -> String {
    raw.map(|s| s.trim().to_string()).unwrap_or_default()
}
