use sri_core::config::{LevelBand, ScoringConfig};
use sri_core::models::results::SriLevel;

use crate::error::ScoringError;

/// Map a composite score to its level using the default band table.
pub fn classify(total_score: f64) -> Result<SriLevel, ScoringError> {
    classify_with(&ScoringConfig::default().level_bands, total_score)
}

/// Map a composite score to its level.
///
/// Bands are inclusive-lower, exclusive-upper; the last band also includes
/// its upper bound. Scores outside [0, 100] are clamped first.
pub fn classify_with(bands: &[LevelBand], total_score: f64) -> Result<SriLevel, ScoringError> {
    if total_score.is_nan() {
        return Err(ScoringError::Unclassifiable(total_score));
    }
    let score = total_score.clamp(0.0, 100.0);
    let last = bands.len().saturating_sub(1);

    bands
        .iter()
        .enumerate()
        .find(|(i, band)| {
            score >= band.min && (score < band.max || (*i == last && score <= band.max))
        })
        .map(|(_, band)| band.level)
        .ok_or(ScoringError::Unclassifiable(total_score))
}
