use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One of the four higher-level constructs the SRI aggregates.
///
/// Higher scores on every dimension mean more repression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dimension {
    /// Erotophobia, as measured by the Sexual Opinion Survey.
    Sos,
    /// Sex guilt (Mosher).
    Guilt,
    /// Sexual shame (KISS-9).
    Shame,
    /// Sexual inhibition over excitation (SIS/SES).
    Inhibition,
}

impl Dimension {
    /// Fixed dimension order. Used wherever output order must be stable.
    pub const ALL: [Dimension; 4] = [
        Dimension::Sos,
        Dimension::Guilt,
        Dimension::Shame,
        Dimension::Inhibition,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Dimension::Sos => "sos",
            Dimension::Guilt => "guilt",
            Dimension::Shame => "shame",
            Dimension::Inhibition => "inhibition",
        }
    }
}

/// A value for each of the four dimensions. Having exactly four fields
/// is what keeps `dimensionScores` at exactly four keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PerDimension<T> {
    pub sos: T,
    pub guilt: T,
    pub shame: T,
    pub inhibition: T,
}

impl<T: Copy> PerDimension<T> {
    pub fn splat(value: T) -> Self {
        Self {
            sos: value,
            guilt: value,
            shame: value,
            inhibition: value,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            sos: f(Dimension::Sos),
            guilt: f(Dimension::Guilt),
            shame: f(Dimension::Shame),
            inhibition: f(Dimension::Inhibition),
        }
    }

    pub fn get(&self, dimension: Dimension) -> T {
        match dimension {
            Dimension::Sos => self.sos,
            Dimension::Guilt => self.guilt,
            Dimension::Shame => self.shame,
            Dimension::Inhibition => self.inhibition,
        }
    }

    /// Pairs in [`Dimension::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, T)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

/// 0–100 score per dimension.
pub type DimensionScores = PerDimension<f64>;

/// Discrete severity band of the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SriLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl SriLevel {
    pub const ALL: [SriLevel; 5] = [
        SriLevel::VeryLow,
        SriLevel::Low,
        SriLevel::Moderate,
        SriLevel::High,
        SriLevel::VeryHigh,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SriLevel::VeryLow => "very-low",
            SriLevel::Low => "low",
            SriLevel::Moderate => "moderate",
            SriLevel::High => "high",
            SriLevel::VeryHigh => "very-high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScaleScore {
    pub scale_id: String,
    pub raw_score: f64,
    pub z_score: f64,
}

/// The composite index and everything it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Sri {
    /// Composite index, 0–100.
    pub total_score: f64,
    /// z-equivalent of `total_score` under the normal approximation.
    pub z_score: f64,
    pub percentile: f64,
    pub level: SriLevel,
    pub dimension_scores: DimensionScores,
    /// One entry per selected scale, in selection order.
    pub scale_scores: Vec<ScaleScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Results {
    pub session_id: Uuid,
    pub sri: Sri,
    pub interpretation: Vec<String>,
    pub recommendations: Vec<String>,
    pub calculated_at: jiff::Timestamp,
}
