use sri_core::config::{ScoringConfig, SriConfig};
use sri_core::models::results::{Dimension, PerDimension, Results, ScaleScore, Sri};
use sri_core::models::session::AssessmentSession;
use sri_instruments::i18n::Locale;
use sri_instruments::norms::NormTable;
use sri_instruments::selector::select_scales;
use sri_instruments::{Scale, get_scales};

use crate::classify::classify_with;
use crate::error::ScoringError;
use crate::narrative::Narrator;
use crate::normal;

/// Probabilities are kept inside this range before inverting Φ so the
/// composite z-score stays finite.
const P_MIN: f64 = 0.0001;
const P_MAX: f64 = 0.9999;

/// Turns a finished response set into an SRI result.
///
/// Holds no per-session state; one `Scorer` can score any number of
/// sessions, from any thread.
pub struct Scorer {
    norms: NormTable,
    config: ScoringConfig,
    narrator: Narrator,
}

impl Scorer {
    pub fn new(config: &SriConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self {
            norms: NormTable::with_overrides(&config.norms),
            config: config.scoring.clone(),
            narrator: Narrator::new()?,
        })
    }

    pub fn norms(&self) -> &NormTable {
        &self.norms
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    /// Compute the numeric result without narrative text.
    pub fn compute(&self, session: &AssessmentSession) -> Result<Sri, ScoringError> {
        let scale_ids = select_scales(&session.demographics, session.mode);
        let scales = get_scales(&scale_ids)?;

        check_required(&scales, session)?;

        let mut scale_scores = Vec::with_capacity(scales.len());
        for scale in &scales {
            let values = collect_values(scale.as_ref(), session)?;
            let raw = scale
                .raw_score(&values)
                .ok_or_else(|| ScoringError::NoAnsweredItems(scale.id().to_string()))?;
            let z = match self.norms.get(scale.id()) {
                Some(norm) => norm.z_score(raw),
                None => {
                    tracing::warn!(scale_id = scale.id(), "no reference norm, using z = 0");
                    0.0
                }
            };
            scale_scores.push(ScaleScore {
                scale_id: scale.id().to_string(),
                raw_score: raw,
                z_score: z,
            });
        }

        let dimension_scores =
            PerDimension::from_fn(|d| dimension_score(d, &scales, &scale_scores));

        let weights = &self.config.dimension_weights;
        let weight_sum: f64 = weights.iter().map(|(_, w)| w).sum();
        let weighted: f64 = dimension_scores
            .iter()
            .map(|(d, score)| score * weights.get(d))
            .sum();
        let total_score = clamp_score(weighted / weight_sum);

        let z_score = normal::inverse_cdf((total_score / 100.0).clamp(P_MIN, P_MAX));
        let percentile = clamp_score(normal::cdf(z_score) * 100.0);
        let level = classify_with(&self.config.level_bands, total_score)?;

        tracing::debug!(
            session_id = %session.id,
            mode = session.mode.as_str(),
            total_score,
            level = level.key(),
            "session scored"
        );

        Ok(Sri {
            total_score,
            z_score,
            percentile,
            level,
            dimension_scores,
            scale_scores,
        })
    }

    pub fn score(
        &self,
        session: &AssessmentSession,
        locale: Locale,
    ) -> Result<Results, ScoringError> {
        self.score_at(session, locale, jiff::Timestamp::now())
    }

    /// [`Scorer::score`] with an explicit calculation time.
    pub fn score_at(
        &self,
        session: &AssessmentSession,
        locale: Locale,
        calculated_at: jiff::Timestamp,
    ) -> Result<Results, ScoringError> {
        let sri = self.compute(session)?;
        let interpretation = self.narrator.interpret(&sri, locale)?;
        let recommendations = self.narrator.recommend(&sri, locale)?;
        Ok(Results {
            session_id: session.id,
            sri,
            interpretation,
            recommendations,
            calculated_at,
        })
    }
}

fn check_required(
    scales: &[Box<dyn Scale>],
    session: &AssessmentSession,
) -> Result<(), ScoringError> {
    let missing: Vec<&str> = scales
        .iter()
        .flat_map(|s| s.questions())
        .filter(|q| q.required && session.responses.get(&q.id).is_none())
        .map(|q| q.id.as_str())
        .collect();

    match missing.first() {
        Some(first) => Err(ScoringError::IncompleteSession {
            first_missing: first.to_string(),
            missing_count: missing.len(),
        }),
        None => Ok(()),
    }
}

/// Answer values aligned with `scale.questions()`, range-checked.
fn collect_values(
    scale: &dyn Scale,
    session: &AssessmentSession,
) -> Result<Vec<Option<i32>>, ScoringError> {
    scale
        .questions()
        .iter()
        .map(|q| match session.responses.get(&q.id) {
            Some(r) if !q.accepts(r.value) => Err(ScoringError::ValueOutOfRange {
                question_id: q.id.clone(),
                value: r.value,
                min: q.min_value(),
                max: q.max_value(),
            }),
            Some(r) => Ok(Some(r.value)),
            None => Ok(None),
        })
        .collect()
}

fn dimension_score(
    dimension: Dimension,
    scales: &[Box<dyn Scale>],
    scale_scores: &[ScaleScore],
) -> f64 {
    let (weighted, weight_sum) = scales
        .iter()
        .zip(scale_scores)
        .filter_map(|(scale, score)| {
            scale
                .weight_for(dimension)
                .filter(|w| *w > 0.0)
                .map(|w| (score.z_score * w, w))
        })
        .fold((0.0, 0.0), |(acc, sum), (v, w)| (acc + v, sum + w));

    let z = if weight_sum > 0.0 {
        weighted / weight_sum
    } else {
        0.0
    };
    clamp_score(normal::cdf(z) * 100.0)
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 50.0;
    }
    score.clamp(0.0, 100.0)
}
