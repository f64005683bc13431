//! Nickname and signature-shot labels. Each label comes from an ordered rule
//! table: the first rule whose predicate holds wins, otherwise the fallback.

use crate::engine::canonical::{canonicalize_traits, Attitude, IdentityTraits, Shot, WallSkill};
use crate::engine::types::PlayerRecord;

pub struct Rule {
    pub label: &'static str,
    pub applies: fn(&IdentityTraits) -> bool,
}

pub struct RuleTable {
    pub rules: &'static [Rule],
    pub fallback: &'static str,
}

impl RuleTable {
    pub fn pick(&self, traits: &IdentityTraits) -> &'static str {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(traits))
            .map(|rule| rule.label)
            .unwrap_or(self.fallback)
    }
}

fn has_bandeja(t: &IdentityTraits) -> bool {
    t.shots.contains(Shot::Bandeja)
}

fn has_vibora(t: &IdentityTraits) -> bool {
    t.shots.contains(Shot::Vibora)
}

fn has_wall_exit(t: &IdentityTraits) -> bool {
    t.shots.contains(Shot::WallExit)
}

fn has_smash(t: &IdentityTraits) -> bool {
    t.shots.contains(Shot::Smash)
}

fn has_chiquita(t: &IdentityTraits) -> bool {
    t.shots.contains(Shot::Chiquita)
}

fn has_lob(t: &IdentityTraits) -> bool {
    t.shots.contains(Shot::Lob)
}

fn high_walls(t: &IdentityTraits) -> bool {
    t.walls == WallSkill::High
}

fn bandeja_with_high_walls(t: &IdentityTraits) -> bool {
    has_bandeja(t) && high_walls(t)
}

fn wall_exit_with_high_walls(t: &IdentityTraits) -> bool {
    has_wall_exit(t) && high_walls(t)
}

fn intense(t: &IdentityTraits) -> bool {
    t.attitude == Attitude::Intense
}

fn calm(t: &IdentityTraits) -> bool {
    t.attitude == Attitude::Calm
}

pub const SIGNATURE_SHOT_RULES: RuleTable = RuleTable {
    rules: &[
        Rule { label: "Deep Bandeja", applies: has_bandeja },
        Rule { label: "Víbora", applies: has_vibora },
        Rule { label: "Wall Exit", applies: has_wall_exit },
        Rule { label: "Smash", applies: has_smash },
        Rule { label: "Chiquita", applies: has_chiquita },
        Rule { label: "Tactical Lob", applies: has_lob },
        Rule { label: "Elite Wall Play", applies: high_walls },
    ],
    fallback: "Consistency",
};

pub const NICKNAME_RULES: RuleTable = RuleTable {
    rules: &[
        Rule { label: "The Sniper", applies: bandeja_with_high_walls },
        Rule { label: "The Wall", applies: wall_exit_with_high_walls },
        Rule { label: "The Vibe", applies: has_vibora },
        Rule { label: "The Panther", applies: intense },
        Rule { label: "The Architect", applies: calm },
    ],
    fallback: "Consistent Player",
};

pub fn derive_signature_shot(player: &PlayerRecord) -> &'static str {
    SIGNATURE_SHOT_RULES.pick(&canonicalize_traits(player))
}

pub fn derive_nickname(player: &PlayerRecord) -> &'static str {
    NICKNAME_RULES.pick(&canonicalize_traits(player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(shots: &[&str], walls: Option<&str>, attitude: Option<&str>) -> PlayerRecord {
        PlayerRecord {
            id: "u1".into(),
            shots: Some(shots.iter().map(|s| s.to_string()).collect()),
            walls: walls.map(str::to_string),
            attitude: attitude.map(str::to_string),
            ..PlayerRecord::default()
        }
    }

    #[test]
    fn bandeja_outranks_smash() {
        let p = player(&["smash", "bandeja"], None, None);
        assert_eq!(derive_signature_shot(&p), "Deep Bandeja");
    }

    #[test]
    fn signature_shot_cascade_order() {
        assert_eq!(derive_signature_shot(&player(&["lob", "vibora"], None, None)), "Víbora");
        assert_eq!(derive_signature_shot(&player(&["chiquita", "globo"], None, None)), "Chiquita");
        assert_eq!(derive_signature_shot(&player(&["globo"], Some("high"), None)), "Tactical Lob");
    }

    #[test]
    fn high_walls_and_fallback() {
        assert_eq!(derive_signature_shot(&player(&[], Some("alto"), None)), "Elite Wall Play");
        assert_eq!(derive_signature_shot(&player(&[], Some("low"), None)), "Consistency");
        assert_eq!(derive_signature_shot(&PlayerRecord::default()), "Consistency");
    }

    #[test]
    fn nickname_needs_high_walls_for_sniper() {
        assert_eq!(derive_nickname(&player(&["bandeja"], Some("high"), None)), "The Sniper");
        assert_eq!(
            derive_nickname(&player(&["bandeja"], Some("medium"), None)),
            "Consistent Player"
        );
    }

    #[test]
    fn nickname_cascade_order() {
        assert_eq!(
            derive_nickname(&player(&["salida-pared", "vibora"], Some("high"), None)),
            "The Wall"
        );
        assert_eq!(
            derive_nickname(&player(&["vibora"], None, Some("intense"))),
            "The Vibe"
        );
        assert_eq!(derive_nickname(&player(&[], None, Some("intenso"))), "The Panther");
        assert_eq!(derive_nickname(&player(&[], None, Some("calm"))), "The Architect");
        assert_eq!(derive_nickname(&player(&[], None, None)), "Consistent Player");
    }

    #[test]
    fn tables_have_six_nicknames_and_eight_shot_labels() {
        assert_eq!(NICKNAME_RULES.rules.len() + 1, 6);
        assert_eq!(SIGNATURE_SHOT_RULES.rules.len() + 1, 8);
    }
}
