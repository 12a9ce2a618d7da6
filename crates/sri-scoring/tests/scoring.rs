use proptest::prelude::*;
use sri_core::config::SriConfig;
use sri_core::models::demographics::{
    AgeBracket, Demographics, Gender, RelationshipStatus, SexualActivity,
};
use sri_core::models::norms::ReferenceNorm;
use sri_core::models::response::Response;
use sri_core::models::results::SriLevel;
use sri_core::models::session::{AssessmentMode, AssessmentSession};
use sri_instruments::i18n::Locale;
use sri_instruments::item::Question;
use sri_instruments::selector::selected_questions;
use sri_scoring::engine::Scorer;
use sri_scoring::error::ScoringError;

fn adult_female_single_active() -> Demographics {
    Demographics {
        age: AgeBracket::Adult,
        gender: Gender::Female,
        relationship_status: RelationshipStatus::Single,
        sexual_activity: SexualActivity::Active,
        consent: true,
    }
}

fn scorer() -> Scorer {
    Scorer::new(&SriConfig::default()).expect("default config is valid")
}

fn answered_session(
    mode: AssessmentMode,
    demographics: Demographics,
    value: impl Fn(&Question) -> i32,
) -> AssessmentSession {
    let mut session = AssessmentSession::new(mode, demographics);
    for q in selected_questions(&demographics, mode) {
        session.responses.upsert(Response::new(q.id.clone(), value(&q)));
    }
    session
}

fn midpoint(q: &Question) -> i32 {
    (q.min_value() + q.max_value()) / 2
}

#[test]
fn midpoint_answers_score_moderate() {
    let session = answered_session(
        AssessmentMode::Quick,
        adult_female_single_active(),
        midpoint,
    );
    let results = scorer().score(&session, Locale::En).unwrap();
    let sri = &results.sri;

    assert_eq!(sri.level, SriLevel::Moderate);
    assert!((sri.total_score - 50.0).abs() < 5.0, "total {}", sri.total_score);
    assert_eq!(sri.scale_scores.len(), 4);
    assert_eq!(sri.scale_scores[0].scale_id, "sos_brief");
    assert_eq!(sri.scale_scores[3].scale_id, "sis_ses_sf");
    for (_, score) in sri.dimension_scores.iter() {
        assert!((score - 50.0).abs() < 10.0, "dimension {score}");
    }
    assert_eq!(results.session_id, session.id);
    assert!(!results.interpretation.is_empty());
    assert!(!results.recommendations.is_empty());
}

#[test]
fn percentile_matches_total_score() {
    let session = answered_session(
        AssessmentMode::Quick,
        adult_female_single_active(),
        midpoint,
    );
    let sri = scorer().compute(&session).unwrap();
    // percentile = Φ(Φ⁻¹(total / 100)) × 100 ≈ total
    assert!((sri.percentile - sri.total_score).abs() < 0.01);
    assert!(sri.z_score.is_finite());
}

#[test]
fn most_repressed_answers_score_very_high() {
    // Highest scored value on every item: max for normal items, min for reversed.
    let session = answered_session(
        AssessmentMode::Full,
        adult_female_single_active(),
        |q| if q.reverse { q.min_value() } else { q.max_value() },
    );
    let sri = scorer().compute(&session).unwrap();
    assert!(sri.total_score >= 80.0, "total {}", sri.total_score);
    assert!(sri.total_score <= 100.0);
    assert_eq!(sri.level, SriLevel::VeryHigh);
    assert!(sri.z_score.is_finite());
}

#[test]
fn least_repressed_answers_score_very_low() {
    let session = answered_session(
        AssessmentMode::Full,
        adult_female_single_active(),
        |q| if q.reverse { q.max_value() } else { q.min_value() },
    );
    let sri = scorer().compute(&session).unwrap();
    assert!(sri.total_score < 20.0, "total {}", sri.total_score);
    assert!(sri.total_score >= 0.0);
    assert_eq!(sri.level, SriLevel::VeryLow);
}

#[test]
fn missing_required_answer_is_rejected() {
    let demographics = adult_female_single_active();
    let mut session = AssessmentSession::new(AssessmentMode::Quick, demographics);
    let questions = selected_questions(&demographics, AssessmentMode::Quick);
    for q in questions.iter().skip(2) {
        session.responses.upsert(Response::new(q.id.clone(), q.min_value()));
    }

    match scorer().compute(&session) {
        Err(ScoringError::IncompleteSession {
            first_missing,
            missing_count,
        }) => {
            assert_eq!(first_missing, questions[0].id);
            assert_eq!(missing_count, 2);
        }
        other => panic!("expected IncompleteSession, got {other:?}"),
    }
}

#[test]
fn empty_session_reports_every_required_question() {
    let demographics = adult_female_single_active();
    let session = AssessmentSession::new(AssessmentMode::Quick, demographics);
    let required = selected_questions(&demographics, AssessmentMode::Quick)
        .iter()
        .filter(|q| q.required)
        .count();

    let err = scorer().compute(&session).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::IncompleteSession { missing_count, .. } if missing_count == required
    ));
}

#[test]
fn out_of_range_value_is_rejected() {
    let mut session = answered_session(
        AssessmentMode::Quick,
        adult_female_single_active(),
        midpoint,
    );
    session.responses.upsert(Response::new("sos_01", 9));

    match scorer().compute(&session) {
        Err(ScoringError::ValueOutOfRange {
            question_id,
            value,
            min,
            max,
        }) => {
            assert_eq!(question_id, "sos_01");
            assert_eq!(value, 9);
            assert_eq!((min, max), (1, 7));
        }
        other => panic!("expected ValueOutOfRange, got {other:?}"),
    }
}

#[test]
fn unanswered_optional_items_do_not_block_scoring() {
    let demographics = Demographics {
        relationship_status: RelationshipStatus::Married,
        ..adult_female_single_active()
    };
    let session = answered_session(AssessmentMode::Full, demographics, midpoint);
    let mut trimmed = AssessmentSession::new(AssessmentMode::Full, demographics);
    for r in session.responses.all() {
        if r.question_id != "body_06" && r.question_id != "partner_06" {
            trimmed.responses.upsert(r.clone());
        }
    }

    let sri = scorer().compute(&trimmed).unwrap();
    assert!(sri.scale_scores.iter().any(|s| s.scale_id == "body_shame"));
    assert!(
        sri.scale_scores
            .iter()
            .any(|s| s.scale_id == "partner_communication")
    );
}

#[test]
fn full_mode_scores_every_selected_scale() {
    let demographics = Demographics {
        relationship_status: RelationshipStatus::Partnered,
        ..adult_female_single_active()
    };
    let session = answered_session(AssessmentMode::Full, demographics, midpoint);
    let sri = scorer().compute(&session).unwrap();
    let ids: Vec<&str> = sri.scale_scores.iter().map(|s| s.scale_id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "sos",
            "mosher_guilt",
            "kiss9",
            "body_shame",
            "sis_ses_sf",
            "sexual_anxiety",
            "partner_communication",
        ]
    );
}

#[test]
fn reverse_coding_is_applied_to_raw_scores() {
    // Every SOS brief item answered 7.
    let session = answered_session(
        AssessmentMode::Quick,
        adult_female_single_active(),
        |q| if q.id.starts_with("sos_") { 7 } else { midpoint(q) },
    );
    let sri = scorer().compute(&session).unwrap();
    let sos = &sri.scale_scores[0];
    assert_eq!(sos.scale_id, "sos_brief");
    // sos_01 and sos_05 are reversed (7 -> 1); the rest stay 7.
    assert!((sos.raw_score - (1.0 + 7.0 + 7.0 + 1.0 + 7.0 + 7.0) / 6.0).abs() < 1e-9);
}

#[test]
fn norm_overrides_change_z_scores() {
    let session = answered_session(
        AssessmentMode::Quick,
        adult_female_single_active(),
        midpoint,
    );
    let config = SriConfig {
        norms: vec![ReferenceNorm::new("kiss9", 2.0, 0.0)],
        ..SriConfig::default()
    };
    let sri = Scorer::new(&config).unwrap().compute(&session).unwrap();
    let kiss = sri
        .scale_scores
        .iter()
        .find(|s| s.scale_id == "kiss9")
        .unwrap();
    // Zero standard deviation degrades to z = 0.
    assert_eq!(kiss.z_score, 0.0);
    assert!((sri.dimension_scores.shame - 50.0).abs() < 1e-6);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = SriConfig::default();
    config.scoring.dimension_weights.guilt = -1.0;
    assert!(matches!(
        Scorer::new(&config),
        Err(ScoringError::Config(_))
    ));
}

#[test]
fn scoring_is_deterministic() {
    let session = answered_session(
        AssessmentMode::Full,
        adult_female_single_active(),
        midpoint,
    );
    let at = jiff::Timestamp::from_second(1_750_000_000).unwrap();
    let scorer = scorer();
    let a = scorer.score_at(&session, Locale::Zh, at).unwrap();
    let b = scorer.score_at(&session, Locale::Zh, at).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.calculated_at, at);
}

fn quick_questions() -> Vec<Question> {
    selected_questions(&adult_female_single_active(), AssessmentMode::Quick)
}

proptest! {
    #[test]
    fn scores_stay_in_range(seeds in prop::collection::vec(0u8..=255, quick_questions().len())) {
        let questions = quick_questions();
        let mut session = AssessmentSession::new(AssessmentMode::Quick, adult_female_single_active());
        for (q, seed) in questions.iter().zip(&seeds) {
            let span = q.max_value() - q.min_value() + 1;
            session.responses.upsert(Response::new(q.id.clone(), q.min_value() + i32::from(*seed) % span));
        }

        let sri = scorer().compute(&session).unwrap();
        prop_assert!((0.0..=100.0).contains(&sri.total_score));
        prop_assert!((0.0..=100.0).contains(&sri.percentile));
        prop_assert!(sri.z_score.is_finite());
        for (_, score) in sri.dimension_scores.iter() {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }
}
