//! sri-instruments
//!
//! Validated questionnaire definitions. Pure data with no storage or UI
//! dependency. Defines the items, answer formats, reverse coding, and
//! dimension weights of each scale, plus the demographic-driven selection
//! of which scales a respondent answers.

pub mod error;
pub mod i18n;
pub mod item;
pub mod norms;
pub mod scales;
pub mod selector;

use sri_core::models::results::Dimension;

use item::{DimensionWeight, Question};

/// Trait implemented by each validated scale.
pub trait Scale: Send + Sync {
    /// Unique identifier for this scale (e.g., "kiss9", "sis_ses_sf").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "KISS-9").
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Items in presentation order.
    fn questions(&self) -> &[Question];

    /// The dimensions this scale feeds and with what weight.
    fn weights(&self) -> &[DimensionWeight];

    fn weight_for(&self, dimension: Dimension) -> Option<f64> {
        self.weights()
            .iter()
            .find(|w| w.dimension == dimension)
            .map(|w| w.weight)
    }

    fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == question_id)
    }

    /// Raw scale score: the mean of the answered items after reverse
    /// coding. `values` lines up with [`Scale::questions`]; `None` marks an
    /// unanswered item. Returns `None` when nothing was answered.
    fn raw_score(&self, values: &[Option<i32>]) -> Option<f64> {
        let scored: Vec<f64> = self
            .questions()
            .iter()
            .zip(values)
            .filter_map(|(q, v)| v.map(|v| q.scored_value(v)))
            .collect();
        if scored.is_empty() {
            return None;
        }
        Some(scored.iter().sum::<f64>() / scored.len() as f64)
    }
}

/// Return all registered scales.
pub fn all_scales() -> Vec<Box<dyn Scale>> {
    vec![
        Box::new(scales::sos::Sos),
        Box::new(scales::sos::SosBrief),
        Box::new(scales::mosher::MosherGuilt),
        Box::new(scales::mosher::MosherBrief),
        Box::new(scales::kiss9::Kiss9),
        Box::new(scales::sis_ses::SisSesSf),
        Box::new(scales::sexual_anxiety::SexualAnxiety),
        Box::new(scales::sexual_anxiety::SexualAnxietyBrief),
        Box::new(scales::body_shame::BodyShame),
        Box::new(scales::partner_communication::PartnerCommunication),
    ]
}

/// Look up a scale by ID.
pub fn get_scale(id: &str) -> Option<Box<dyn Scale>> {
    all_scales().into_iter().find(|s| s.id() == id)
}

/// Look up scales by ID, preserving order. Fails on the first unknown ID.
pub fn get_scales(ids: &[&str]) -> Result<Vec<Box<dyn Scale>>, error::InstrumentError> {
    ids.iter()
        .map(|id| get_scale(id).ok_or_else(|| error::InstrumentError::UnknownScale(id.to_string())))
        .collect()
}
