use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Reference-population parameters for z-normalizing one scale's raw
/// (item-mean) score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReferenceNorm {
    pub scale_id: String,
    pub mean: f64,
    pub std_dev: f64,
}

impl ReferenceNorm {
    pub fn new(scale_id: impl Into<String>, mean: f64, std_dev: f64) -> Self {
        Self {
            scale_id: scale_id.into(),
            mean,
            std_dev,
        }
    }

    /// `(raw - mean) / std_dev`, or 0 when the deviation is unusable.
    pub fn z_score(&self, raw: f64) -> f64 {
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 || !self.mean.is_finite() {
            return 0.0;
        }
        (raw - self.mean) / self.std_dev
    }
}
