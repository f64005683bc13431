use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::engine::compatibility::round2;
use crate::engine::types::{Category, FeedbackEntry};
use crate::validation::is_valid_rating;

pub type CategoryAverages = BTreeMap<Category, f64>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub averages: CategoryAverages,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: Category,
    pub label: &'static str,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extremes {
    pub top2: Vec<CategoryScore>,
    pub bottom2: Vec<CategoryScore>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedbackError {
    #[error("feedback must name the player it is about")]
    MissingSubject,
    #[error("feedback must rate at least one category")]
    NoRatings,
    #[error("{category} rating {value} is outside 1-5")]
    RatingOutOfRange { category: &'static str, value: f64 },
}

/// Per-category means over all entries. An absent rating counts as 0 and
/// still increments the denominator.
pub fn aggregate(entries: &[FeedbackEntry]) -> FeedbackSummary {
    if entries.is_empty() {
        return FeedbackSummary::default();
    }

    let count = entries.len();
    let averages = Category::ALL
        .iter()
        .map(|&category| {
            let sum: f64 = entries.iter().map(|e| e.rating(category).unwrap_or(0.0)).sum();
            (category, round2(sum / count as f64))
        })
        .collect();

    FeedbackSummary { averages, count }
}

/// Two strongest categories (best first) and two weakest (weakest first).
/// With fewer than four categories the lists may overlap.
pub fn top_and_bottom(averages: &CategoryAverages) -> Extremes {
    let mut sorted: Vec<CategoryScore> = averages
        .iter()
        .map(|(&category, &score)| CategoryScore {
            category,
            label: category.label(),
            score,
        })
        .collect();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));

    let top2 = sorted.iter().take(2).cloned().collect();
    let bottom2 = sorted.iter().rev().take(2).cloned().collect();

    Extremes { top2, bottom2 }
}

pub fn validate_submission(entry: &FeedbackEntry) -> Result<(), FeedbackError> {
    if entry.about_player.trim().is_empty() {
        return Err(FeedbackError::MissingSubject);
    }

    let mut rated = 0;
    for category in Category::ALL {
        if let Some(value) = entry.rating(category) {
            if !is_valid_rating(value) {
                return Err(FeedbackError::RatingOutOfRange {
                    category: category.key(),
                    value,
                });
            }
            rated += 1;
        }
    }

    if rated == 0 {
        return Err(FeedbackError::NoRatings);
    }
    Ok(())
}
