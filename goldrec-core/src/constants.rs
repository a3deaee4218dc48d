/// Goldrec system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal digits similarity scores and probabilities are rounded to.
/// Fixed (not configurable) so reruns and fixtures reproduce byte-identically.
pub const SCORE_DECIMALS: u32 = 4;

/// Maximum length of a merged notes field, in characters.
pub const NOTES_MAX_CHARS: usize = 500;
