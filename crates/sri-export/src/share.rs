//! Compact, URL-safe share tokens.
//!
//! A token is `sri1.<payload>.<checksum>`: the payload is the summary as
//! JSON, base64url without padding; the checksum is the first 8 bytes of
//! the payload's SHA-256, encoded the same way. The checksum detects
//! corruption and casual edits. It is not a signature, so the decoder
//! also rejects a level that the default bands would not give the total.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sri_core::models::results::{DimensionScores, Results, SriLevel};
use sri_core::models::session::{AssessmentMode, AssessmentSession};
use sri_scoring::classify::classify;
use ts_rs::TS;

use crate::error::ShareError;

pub const TOKEN_PREFIX: &str = "sri1";

const CHECKSUM_LEN: usize = 8;

/// The part of a result that is safe to share: no responses, no
/// demographics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[ts(export)]
pub struct ShareSummary {
    pub total_score: f64,
    pub level: SriLevel,
    pub dimension_scores: DimensionScores,
    pub completed_at: jiff::Timestamp,
    #[serde(rename = "type")]
    pub mode: AssessmentMode,
}

impl ShareSummary {
    pub fn from_results(results: &Results, mode: AssessmentMode) -> Self {
        Self {
            total_score: results.sri.total_score,
            level: results.sri.level,
            dimension_scores: results.sri.dimension_scores,
            completed_at: results.calculated_at,
            mode,
        }
    }

    /// `None` until the session has results.
    pub fn from_session(session: &AssessmentSession) -> Option<Self> {
        session
            .results
            .as_ref()
            .map(|r| Self::from_results(r, session.mode))
    }

    fn check(&self) -> Result<(), ShareError> {
        let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
        if !in_range(self.total_score) {
            return Err(ShareError::OutOfRange(format!(
                "totalScore {}",
                self.total_score
            )));
        }
        for (dimension, score) in self.dimension_scores.iter() {
            if !in_range(score) {
                return Err(ShareError::OutOfRange(format!(
                    "{} {score}",
                    dimension.key()
                )));
            }
        }
        let expected = classify(self.total_score)
            .map_err(|e| ShareError::OutOfRange(e.to_string()))?;
        if expected != self.level {
            return Err(ShareError::LevelMismatch {
                level: self.level.key().to_string(),
                total_score: self.total_score.to_string(),
            });
        }
        Ok(())
    }
}

fn checksum(payload: &[u8]) -> String {
    let digest = Sha256::digest(payload);
    URL_SAFE_NO_PAD.encode(&digest[..CHECKSUM_LEN])
}

/// Encode a summary. Scores must lie in [0, 100] and the level must be
/// the one the default bands assign to the total.
pub fn encode(summary: &ShareSummary) -> Result<String, ShareError> {
    summary.check()?;
    let json =
        serde_json::to_vec(summary).map_err(|e| ShareError::Payload(e.to_string()))?;
    Ok(format!(
        "{TOKEN_PREFIX}.{}.{}",
        URL_SAFE_NO_PAD.encode(&json),
        checksum(&json)
    ))
}

/// Decode a token, or `None` if it is invalid in any way.
pub fn decode(token: &str) -> Option<ShareSummary> {
    match try_decode(token) {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::debug!(error = %e, "share token rejected");
            None
        }
    }
}

pub fn try_decode(token: &str) -> Result<ShareSummary, ShareError> {
    let mut parts = token.trim().split('.');
    let (Some(version), Some(payload), Some(sum), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ShareError::Malformed);
    };
    if version != TOKEN_PREFIX {
        return Err(ShareError::UnsupportedVersion(version.to_string()));
    }

    let json = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| ShareError::Encoding)?;
    if checksum(&json) != sum {
        return Err(ShareError::Checksum);
    }

    let summary: ShareSummary =
        serde_json::from_slice(&json).map_err(|e| ShareError::Payload(e.to_string()))?;
    summary.check()?;
    Ok(summary)
}
