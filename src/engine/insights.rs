use serde::{Deserialize, Serialize};

use crate::engine::feedback::{aggregate, top_and_bottom, CategoryAverages, CategoryScore, FeedbackSummary};
use crate::engine::identity::{derive_nickname, derive_signature_shot};
use crate::engine::lenient;
use crate::engine::types::{Category, FeedbackEntry, PlayerRecord};

/// Per-player feedback totals maintained by the store, if it keeps them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateRow {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub player_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub comms_avg: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub positioning_avg: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub consistency_avg: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub sportsmanship_avg: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub walls_avg: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_u64")]
    pub fb_count: Option<u64>,
}

impl AggregateRow {
    fn average(&self, category: Category) -> Option<f64> {
        match category {
            Category::Comms => self.comms_avg,
            Category::Positioning => self.positioning_avg,
            Category::Consistency => self.consistency_avg,
            Category::Sportsmanship => self.sportsmanship_avg,
            Category::Walls => self.walls_avg,
        }
    }

    /// `local_count` stands in when the row carries no `fb_count`.
    pub fn to_summary(&self, local_count: usize) -> FeedbackSummary {
        let averages: CategoryAverages = Category::ALL
            .iter()
            .map(|&c| (c, self.average(c).unwrap_or(0.0)))
            .collect();
        FeedbackSummary {
            averages,
            count: self
                .fb_count
                .map(|n| n as usize)
                .unwrap_or(local_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInsights {
    pub player_id: String,
    pub averages: CategoryAverages,
    pub count: usize,
    pub top2: Vec<CategoryScore>,
    pub bottom2: Vec<CategoryScore>,
    pub nickname: &'static str,
    pub signature_shot: &'static str,
}

/// Public profile block for one player. A precomputed row wins over the raw
/// feedback entries.
pub fn player_insights(
    player: &PlayerRecord,
    feedback: &[FeedbackEntry],
    precomputed: Option<&AggregateRow>,
) -> PlayerInsights {
    let summary = match precomputed {
        Some(row) => row.to_summary(feedback.len()),
        None => aggregate(feedback),
    };
    let extremes = top_and_bottom(&summary.averages);

    PlayerInsights {
        player_id: player.id.trim().to_string(),
        averages: summary.averages,
        count: summary.count,
        top2: extremes.top2,
        bottom2: extremes.bottom2,
        nickname: derive_nickname(player),
        signature_shot: derive_signature_shot(player),
    }
}
