use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::lenient;

/// Answers collected by the onboarding wizard. Only the fields the level
/// estimator looks at are modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingAnswers {
    #[serde(deserialize_with = "lenient::opt_string_list")]
    pub shots: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub walls: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub objective: Option<String>,
}

/// A player row as stored by the surrounding application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub level: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub position: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string_list")]
    pub shots: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub walls: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub attitude: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub competitiveness: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub frequency: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub objective: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string_list")]
    pub availability: Option<Vec<String>>,
}

impl From<&PlayerRecord> for OnboardingAnswers {
    fn from(player: &PlayerRecord) -> Self {
        Self {
            shots: player.shots.clone(),
            walls: player.walls.clone(),
            objective: player.objective.clone(),
        }
    }
}

/// A pair row as read from the external store. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PairRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub player1_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub player2_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub average_score: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub competitiveness: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string_list")]
    pub availability: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub temporary: Option<bool>,
}

/// Fully defaulted pair. `average_score` is a snapshot taken when the pair
/// was built and is never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub id: String,
    pub player1_id: String,
    pub player2_id: String,
    pub average_score: f64,
    pub competitiveness: String,
    pub availability: Vec<String>,
    pub location: String,
    pub temporary: bool,
}

impl Pair {
    pub fn has_player(&self, player_id: &str) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Comms,
    Positioning,
    Consistency,
    Sportsmanship,
    Walls,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Comms,
        Category::Positioning,
        Category::Consistency,
        Category::Sportsmanship,
        Category::Walls,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Comms => "comms",
            Category::Positioning => "positioning",
            Category::Consistency => "consistency",
            Category::Sportsmanship => "sportsmanship",
            Category::Walls => "walls",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Comms => "Communication",
            Category::Positioning => "Positioning",
            Category::Consistency => "Consistency",
            Category::Sportsmanship => "Sportsmanship",
            Category::Walls => "Wall Play",
        }
    }
}

/// One reviewer's ratings of one player after one match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackEntry {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub match_id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub about_player: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub from_player: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub comms: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub positioning: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub consistency: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub sportsmanship: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub walls: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub notes: Option<String>,
}

impl FeedbackEntry {
    pub fn rating(&self, category: Category) -> Option<f64> {
        match category {
            Category::Comms => self.comms,
            Category::Positioning => self.positioning,
            Category::Consistency => self.consistency,
            Category::Sportsmanship => self.sportsmanship,
            Category::Walls => self.walls,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[serde(alias = "amistoso")]
    Friendly,
    #[default]
    #[serde(alias = "competitivo")]
    Competitive,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Friendly => "friendly",
            MatchMode::Competitive => "competitive",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown match mode '{}'", self.0)
    }
}

impl FromStr for MatchMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "friendly" | "amistoso" => Ok(MatchMode::Friendly),
            "competitive" | "competitivo" => Ok(MatchMode::Competitive),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}
