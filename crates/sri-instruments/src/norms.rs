//! Reference-population norms for z-normalization.
//!
//! Values are on the item-mean metric of each scale (the same metric
//! [`crate::Scale::raw_score`] produces), after reverse coding. They are
//! configuration data: [`NormTable::with_overrides`] replaces any entry
//! from `SriConfig::norms`.

use sri_core::models::norms::ReferenceNorm;

/// Built-in norms: `(scale_id, mean, std_dev)`.
///
/// Means sit slightly off the option midpoint, as published community
/// samples do; standard deviations are per-item, not per-total.
const BUILT_IN: &[(&str, f64, f64)] = &[
    ("sos", 3.9, 1.2),
    ("sos_brief", 3.9, 1.3),
    ("mosher_guilt", 4.1, 1.1),
    ("mosher_brief", 4.1, 1.2),
    ("kiss9", 1.9, 0.9),
    ("sis_ses_sf", 2.45, 0.45),
    ("sexual_anxiety", 2.9, 0.85),
    ("sexual_anxiety_brief", 2.9, 0.9),
    ("body_shame", 2.8, 0.95),
    ("partner_communication", 3.1, 0.8),
];

#[derive(Debug, Clone, PartialEq)]
pub struct NormTable {
    norms: Vec<ReferenceNorm>,
}

impl Default for NormTable {
    fn default() -> Self {
        Self {
            norms: BUILT_IN
                .iter()
                .map(|&(id, mean, sd)| ReferenceNorm::new(id, mean, sd))
                .collect(),
        }
    }
}

impl NormTable {
    pub fn with_overrides(overrides: &[ReferenceNorm]) -> Self {
        let mut table = Self::default();
        for norm in overrides {
            match table.norms.iter_mut().find(|n| n.scale_id == norm.scale_id) {
                Some(existing) => *existing = norm.clone(),
                None => table.norms.push(norm.clone()),
            }
            tracing::debug!(scale_id = %norm.scale_id, mean = norm.mean, std_dev = norm.std_dev, "norm override applied");
        }
        table
    }

    pub fn get(&self, scale_id: &str) -> Option<&ReferenceNorm> {
        self.norms.iter().find(|n| n.scale_id == scale_id)
    }

    pub fn all(&self) -> &[ReferenceNorm] {
        &self.norms
    }
}
