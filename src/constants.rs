/// Neutral skill level used when a player or pair row carries none
pub const DEFAULT_LEVEL: f64 = 5.0;

/// Competitiveness assumed when absent, and the tie-break when partners disagree
pub const DEFAULT_COMPETITIVENESS: &str = "intermediate";

/// Self-reported level range accepted by the onboarding form
pub const ONBOARDING_MIN_LEVEL: f64 = 1.0;
pub const ONBOARDING_MAX_LEVEL: f64 = 7.0;

/// Feedback rating bounds (inclusive)
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Prefix for synthesized pair ids: `pair_{player1}_{player2}`
pub const PAIR_ID_PREFIX: &str = "pair_";

/// Largest candidate pool accepted by a single ranking request
pub const DEFAULT_MAX_CANDIDATES: usize = 200;

/// Maximum request body size: 1 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
