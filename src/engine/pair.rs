use std::collections::HashSet;

use crate::constants::{DEFAULT_COMPETITIVENESS, PAIR_ID_PREFIX};
use crate::engine::canonical::{canonicalize_player, PlayerProfile};
use crate::engine::types::{Pair, PlayerRecord};

/// Merge two players into a pair snapshot. Player order is preserved;
/// permanence is the caller's decision.
pub fn make_pair(player_a: &PlayerRecord, player_b: &PlayerRecord, temporary: bool) -> Pair {
    let a = canonicalize_player(player_a);
    let b = canonicalize_player(player_b);
    synthesize(&a, &b, temporary)
}

fn synthesize(a: &PlayerProfile, b: &PlayerProfile, temporary: bool) -> Pair {
    Pair {
        id: format!("{PAIR_ID_PREFIX}{}_{}", a.id, b.id),
        player1_id: a.id.clone(),
        player2_id: b.id.clone(),
        average_score: (a.level + b.level) / 2.0,
        competitiveness: shared_competitiveness(a, b),
        availability: merge_availability(&a.availability, &b.availability),
        location: home_location(a, b),
        temporary,
    }
}

// Disagreement never resolves to either side.
fn shared_competitiveness(a: &PlayerProfile, b: &PlayerProfile) -> String {
    if a.competitiveness == b.competitiveness {
        a.competitiveness.clone()
    } else {
        DEFAULT_COMPETITIVENESS.to_string()
    }
}

fn merge_availability(a: &[String], b: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    a.iter()
        .chain(b.iter())
        .filter(|slot| seen.insert(slot.as_str()))
        .cloned()
        .collect()
}

fn home_location(a: &PlayerProfile, b: &PlayerProfile) -> String {
    if !a.city.is_empty() {
        a.city.clone()
    } else {
        b.city.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str) -> PlayerRecord {
        PlayerRecord {
            id: id.to_string(),
            ..PlayerRecord::default()
        }
    }

    fn slots(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn average_is_the_plain_mean() {
        let a = PlayerRecord {
            level: Some(6.5),
            ..player("a")
        };
        let b = PlayerRecord {
            level: Some(3.0),
            ..player("b")
        };
        assert_eq!(make_pair(&a, &b, false).average_score, (6.5 + 3.0) / 2.0);
    }

    #[test]
    fn missing_levels_default_to_five() {
        let a = PlayerRecord {
            level: Some(7.0),
            ..player("a")
        };
        assert_eq!(make_pair(&a, &player("b"), false).average_score, 6.0);
    }

    #[test]
    fn competitiveness_disagreement_resolves_to_neutral() {
        let high = PlayerRecord {
            competitiveness: Some("high".into()),
            ..player("a")
        };
        let low = PlayerRecord {
            competitiveness: Some("low".into()),
            ..player("b")
        };
        assert_eq!(make_pair(&high, &low, false).competitiveness, "intermediate");

        let high_too = PlayerRecord {
            competitiveness: Some("high".into()),
            ..player("c")
        };
        assert_eq!(make_pair(&high, &high_too, false).competitiveness, "high");
    }

    #[test]
    fn availability_is_a_deduplicated_union() {
        let a = PlayerRecord {
            availability: slots(&["mon-pm", "sat-am"]),
            ..player("a")
        };
        let b = PlayerRecord {
            availability: slots(&["sat-am", "sun-am"]),
            ..player("b")
        };
        let mut merged = make_pair(&a, &b, false).availability;
        merged.sort();
        assert_eq!(merged, ["mon-pm", "sat-am", "sun-am"]);
    }

    #[test]
    fn location_prefers_player_a() {
        let a = PlayerRecord {
            city: Some("Valencia".into()),
            ..player("a")
        };
        let b = PlayerRecord {
            city: Some("Madrid".into()),
            ..player("b")
        };
        assert_eq!(make_pair(&a, &b, false).location, "Valencia");
        assert_eq!(make_pair(&player("a"), &b, false).location, "Madrid");
        assert_eq!(make_pair(&player("a"), &player("b"), false).location, "");
    }

    #[test]
    fn identity_and_flag_come_from_inputs() {
        let pair = make_pair(&player("u1"), &player("u2"), true);
        assert_eq!(pair.id, "pair_u1_u2");
        assert_eq!(pair.player1_id, "u1");
        assert_eq!(pair.player2_id, "u2");
        assert!(pair.temporary);
    }
}
