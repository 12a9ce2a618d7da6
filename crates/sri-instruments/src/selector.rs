//! Demographic-driven scale selection.
//!
//! A pure function of `(demographics, mode)`. `Unspecified` attributes
//! never remove a scale, so missing information yields the most inclusive
//! selection rather than an empty one.

use sri_core::models::demographics::{
    AgeBracket, Demographics, Gender, RelationshipStatus, SexualActivity,
};
use sri_core::models::results::Dimension;
use sri_core::models::session::AssessmentMode;

use crate::i18n::Locale;
use crate::item::Question;
use crate::{Scale, get_scale};

/// Ordered scale ids the respondent must complete.
pub fn select_scales(demographics: &Demographics, mode: AssessmentMode) -> Vec<&'static str> {
    let minor = demographics.is_minor();
    let activity = demographics.sexual_activity;

    let selected = match mode {
        AssessmentMode::Quick => {
            let no_partnered_experience = minor
                || matches!(activity, SexualActivity::Inactive | SexualActivity::Never);
            let inhibition = if no_partnered_experience {
                "sexual_anxiety_brief"
            } else {
                "sis_ses_sf"
            };
            vec!["sos_brief", "mosher_brief", "kiss9", inhibition]
        }
        AssessmentMode::Full => {
            let never = activity == SexualActivity::Never;
            let mut ids = vec!["sos", "mosher_guilt", "kiss9", "body_shame"];
            if !minor && !never {
                ids.push("sis_ses_sf");
            }
            ids.push("sexual_anxiety");
            if !minor && !never && demographics.relationship_status.has_partner() {
                ids.push("partner_communication");
            }
            ids
        }
    };

    tracing::debug!(mode = mode.as_str(), scales = ?selected, "scales selected");
    selected
}

/// The selected scales, resolved from the registry.
pub fn selected_scales(demographics: &Demographics, mode: AssessmentMode) -> Vec<Box<dyn Scale>> {
    select_scales(demographics, mode)
        .into_iter()
        .filter_map(get_scale)
        .collect()
}

/// Every question of the selection, flattened in presentation order.
pub fn selected_questions(demographics: &Demographics, mode: AssessmentMode) -> Vec<Question> {
    selected_scales(demographics, mode)
        .iter()
        .flat_map(|s| s.questions().iter().cloned())
        .collect()
}

/// Dimensions fed by at least one scale in `scale_ids` with non-zero weight.
pub fn covered_dimensions(scale_ids: &[&str]) -> Vec<Dimension> {
    let scales: Vec<_> = scale_ids.iter().filter_map(|id| get_scale(id)).collect();
    Dimension::ALL
        .into_iter()
        .filter(|d| {
            scales
                .iter()
                .any(|s| s.weight_for(*d).is_some_and(|w| w > 0.0))
        })
        .collect()
}

/// Short label for the respondent group, shown next to the selection.
pub fn describe_group(demographics: &Demographics, locale: Locale) -> String {
    let zh = locale == Locale::Zh;
    let age = match (demographics.age, zh) {
        (AgeBracket::Minor, false) => "Minor",
        (AgeBracket::Minor, true) => "未成年人",
        (AgeBracket::YoungAdult, false) => "Young adult",
        (AgeBracket::YoungAdult, true) => "青年",
        (AgeBracket::Adult, false) => "Adult",
        (AgeBracket::Adult, true) => "成年人",
        (AgeBracket::MiddleAged, false) => "Middle-aged",
        (AgeBracket::MiddleAged, true) => "中年",
        (AgeBracket::Senior, false) => "Senior",
        (AgeBracket::Senior, true) => "老年",
        (AgeBracket::Unspecified, false) => "General",
        (AgeBracket::Unspecified, true) => "通用",
    };

    let gender = match (demographics.gender, zh) {
        (Gender::Male, false) => Some("male"),
        (Gender::Male, true) => Some("男性"),
        (Gender::Female, false) => Some("female"),
        (Gender::Female, true) => Some("女性"),
        (Gender::NonBinary, false) => Some("non-binary"),
        (Gender::NonBinary, true) => Some("非二元"),
        _ => None,
    };

    let partner = match (demographics.relationship_status, zh) {
        (RelationshipStatus::Unspecified, _) => None,
        (status, false) if status.has_partner() => Some("partnered"),
        (status, true) if status.has_partner() => Some("有伴侣"),
        (_, false) => Some("single"),
        (_, true) => Some("单身"),
    };

    let activity = match (demographics.sexual_activity, zh) {
        (SexualActivity::Active, false) => Some("sexually active"),
        (SexualActivity::Active, true) => Some("有性经验"),
        (SexualActivity::Inactive, false) => Some("currently inactive"),
        (SexualActivity::Inactive, true) => Some("近期无性生活"),
        (SexualActivity::Never, false) => Some("no sexual experience"),
        (SexualActivity::Never, true) => Some("无性经验"),
        (SexualActivity::Unspecified, _) => None,
    };

    let separator = if zh { "·" } else { ", " };
    std::iter::once(age)
        .chain(gender)
        .chain(partner)
        .chain(activity)
        .collect::<Vec<_>>()
        .join(separator)
}
