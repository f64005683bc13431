use crate::engine::types::Pair;

/// Opponent pool for `my_pair`: never the caller's own pair, never a pair
/// the viewing player belongs to, optionally only pairs in a given city.
pub fn candidate_pool(
    my_pair: &Pair,
    all_pairs: &[Pair],
    viewer_id: Option<&str>,
    city: Option<&str>,
) -> Vec<Pair> {
    let viewer = viewer_id.map(str::trim).filter(|v| !v.is_empty());
    let city = city
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty());

    all_pairs
        .iter()
        .filter(|p| p.id != my_pair.id)
        .filter(|p| viewer.map_or(true, |v| !p.has_player(v)))
        .filter(|p| {
            city.as_deref()
                .map_or(true, |c| p.location.to_lowercase().contains(c))
        })
        .cloned()
        .collect()
}

/// The pair the player is currently playing in. With an active partner the
/// exact pairing is preferred; otherwise the first pair containing the
/// player.
pub fn resolve_my_pair<'a>(
    pairs: &'a [Pair],
    player_id: &str,
    partner_id: Option<&str>,
) -> Option<&'a Pair> {
    let player_id = player_id.trim();
    if player_id.is_empty() {
        return None;
    }

    let exact = partner_id
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .and_then(|partner| {
            pairs
                .iter()
                .find(|p| p.has_player(player_id) && p.has_player(partner))
        });

    exact.or_else(|| pairs.iter().find(|p| p.has_player(player_id)))
}
