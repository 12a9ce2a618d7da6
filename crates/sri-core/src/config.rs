use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::norms::ReferenceNorm;
use crate::models::results::{PerDimension, SriLevel};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Weight of each dimension in the composite index.
pub type DimensionWeights = PerDimension<f64>;

/// One severity band: `min <= score < max`, except the last band, which
/// also includes its `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LevelBand {
    pub level: SriLevel,
    pub min: f64,
    pub max: f64,
}

/// Fields missing from the file take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ScoringConfig {
    pub dimension_weights: DimensionWeights,
    pub level_bands: Vec<LevelBand>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let band = |level, min, max| LevelBand { level, min, max };
        Self {
            dimension_weights: DimensionWeights::splat(0.25),
            level_bands: vec![
                band(SriLevel::VeryLow, 0.0, 20.0),
                band(SriLevel::Low, 20.0, 40.0),
                band(SriLevel::Moderate, 40.0, 60.0),
                band(SriLevel::High, 60.0, 80.0),
                band(SriLevel::VeryHigh, 80.0, 100.0),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ProgressConfig {
    /// Auto-save window. Saves scheduled within it collapse into one write.
    pub debounce_ms: u64,
    /// Questions per page in full mode. Quick mode is always one page.
    pub page_size: usize,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            page_size: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SriConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Replaces the built-in reference norm for each listed scale.
    #[serde(default)]
    pub norms: Vec<ReferenceNorm>,
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl SriConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        let weights = &self.scoring.dimension_weights;
        if weights.iter().any(|(_, w)| !w.is_finite() || w < 0.0) {
            return Err(CoreError::InvalidConfig(
                "dimension weights must be finite and non-negative".to_string(),
            ));
        }
        if weights.iter().map(|(_, w)| w).sum::<f64>() <= 0.0 {
            return Err(CoreError::InvalidConfig(
                "dimension weights must not all be zero".to_string(),
            ));
        }

        validate_bands(&self.scoring.level_bands)?;

        if self.progress.page_size == 0 {
            return Err(CoreError::InvalidConfig(
                "progress.page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Bands must be ordered, contiguous, and cover exactly [0, 100].
fn validate_bands(bands: &[LevelBand]) -> Result<(), CoreError> {
    let (Some(first), Some(last)) = (bands.first(), bands.last()) else {
        return Err(CoreError::InvalidConfig("level_bands is empty".to_string()));
    };
    if first.min != 0.0 || last.max != 100.0 {
        return Err(CoreError::InvalidConfig(format!(
            "level bands must cover [0, 100], got [{}, {}]",
            first.min, last.max
        )));
    }
    for band in bands {
        if !(band.min < band.max) {
            return Err(CoreError::InvalidConfig(format!(
                "band {} has min {} >= max {}",
                band.level.key(),
                band.min,
                band.max
            )));
        }
    }
    for pair in bands.windows(2) {
        if pair[0].max != pair[1].min {
            return Err(CoreError::InvalidConfig(format!(
                "gap or overlap between {} and {}",
                pair[0].level.key(),
                pair[1].level.key()
            )));
        }
    }
    Ok(())
}

pub fn load_config(path: &Path) -> Result<SriConfig, CoreError> {
    let contents = std::fs::read_to_string(path)?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let raw_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version =
        u32::try_from(raw_version).map_err(|_| CoreError::UnsupportedConfigVersion {
            found: raw_version,
            supported: CURRENT_VERSION,
        })?;

    let migrated = migrate(json, on_disk_version)?;
    let config: SriConfig = serde_json::from_value(migrated)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, CoreError> {
    if from_version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedConfigVersion {
            found: from_version.into(),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: pagination landed; pin the page size old configs implied.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| CoreError::InvalidConfig("config is not a JSON object".to_string()))?;
        if let Some(progress) = obj.get_mut("progress").and_then(|p| p.as_object_mut()) {
            progress
                .entry("page_size")
                .or_insert(serde_json::Value::Number(15.into()));
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added progress.page_size)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &SriConfig) -> Result<(), CoreError> {
    config.validate()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
