use serde_json::{json, Value};

pub fn player(id: &str, level: f64, competitiveness: &str, slots: &[&str], city: &str) -> Value {
    json!({
        "id": id,
        "level": level,
        "competitiveness": competitiveness,
        "availability": slots,
        "city": city,
    })
}

pub fn pair(
    id: &str,
    players: (&str, &str),
    average: f64,
    competitiveness: &str,
    slots: &[&str],
    location: &str,
) -> Value {
    json!({
        "id": id,
        "player1_id": players.0,
        "player2_id": players.1,
        "average_score": average,
        "competitiveness": competitiveness,
        "availability": slots,
        "location": location,
    })
}

pub fn feedback(about: &str, comms: u8, positioning: u8, consistency: u8, sportsmanship: u8, walls: u8) -> Value {
    json!({
        "match_id": "m1",
        "about_player": about,
        "from_player": "reviewer",
        "comms": comms,
        "positioning": positioning,
        "consistency": consistency,
        "sportsmanship": sportsmanship,
        "walls": walls,
    })
}
