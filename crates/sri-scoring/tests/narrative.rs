use sri_core::models::results::{Dimension, DimensionScores, Sri, SriLevel};
use sri_instruments::i18n::Locale;
use sri_scoring::narrative::{Narrator, deviating_dimensions};

fn sri(total: f64, level: SriLevel, dims: DimensionScores) -> Sri {
    Sri {
        total_score: total,
        z_score: 0.0,
        percentile: total,
        level,
        dimension_scores: dims,
        scale_scores: Vec::new(),
    }
}

fn scores(sos: f64, guilt: f64, shame: f64, inhibition: f64) -> DimensionScores {
    DimensionScores {
        sos,
        guilt,
        shame,
        inhibition,
    }
}

#[test]
fn deviation_picks_largest_two() {
    let picked = deviating_dimensions(&scores(75.0, 30.0, 82.0, 55.0));
    let dims: Vec<Dimension> = picked.iter().map(|(d, _)| *d).collect();
    assert_eq!(dims, [Dimension::Shame, Dimension::Sos]);
}

#[test]
fn deviation_ties_keep_dimension_order() {
    let picked = deviating_dimensions(&scores(50.0, 70.0, 30.0, 70.0));
    let dims: Vec<Dimension> = picked.iter().map(|(d, _)| *d).collect();
    assert_eq!(dims, [Dimension::Guilt, Dimension::Shame]);
}

#[test]
fn deviation_threshold_is_inclusive() {
    assert_eq!(deviating_dimensions(&scores(60.0, 50.0, 50.0, 50.0)).len(), 1);
    assert!(deviating_dimensions(&scores(59.9, 40.1, 50.0, 50.0)).is_empty());
}

#[test]
fn interpretation_mentions_score_and_highlights() {
    let narrator = Narrator::new().unwrap();
    let result = sri(67.4, SriLevel::High, scores(50.0, 72.0, 50.0, 50.0));
    let text = narrator.interpret(&result, Locale::En).unwrap();

    assert_eq!(text.len(), 3);
    assert!(text[0].contains("67"), "{}", text[0]);
    assert!(!text[0].contains("67.4"));
    assert!(text[0].contains("high range"));
    assert!(text[1].starts_with("Sex guilt (72)"), "{}", text[1]);
}

#[test]
fn balanced_profile_gets_balanced_note() {
    let narrator = Narrator::new().unwrap();
    let result = sri(50.0, SriLevel::Moderate, DimensionScores::splat(50.0));
    let text = narrator.interpret(&result, Locale::En).unwrap();
    assert!(text[1].contains("close to the population average"));
}

#[test]
fn recommendations_include_elevated_dimensions() {
    let narrator = Narrator::new().unwrap();
    let result = sri(85.0, SriLevel::VeryHigh, scores(90.0, 85.0, 55.0, 62.0));
    let advice = narrator.recommend(&result, Locale::En).unwrap();
    // Two level items, sos, guilt, inhibition, closing.
    assert_eq!(advice.len(), 6);
    assert!(advice[0].contains("therapist"));
}

#[test]
fn chinese_output() {
    let narrator = Narrator::new().unwrap();
    let result = sri(30.0, SriLevel::Low, scores(30.0, 50.0, 50.0, 50.0));
    let text = narrator.interpret(&result, Locale::Zh).unwrap();
    assert!(text[0].contains("较低水平"));
    assert!(text[1].contains("性恐惧（30）"));
    let advice = narrator.recommend(&result, Locale::Zh).unwrap();
    assert_eq!(advice.len(), 2);
}

#[test]
fn narrative_is_deterministic() {
    let narrator = Narrator::new().unwrap();
    let result = sri(45.0, SriLevel::Moderate, scores(61.0, 39.0, 50.0, 48.0));
    assert_eq!(
        narrator.interpret(&result, Locale::En).unwrap(),
        narrator.interpret(&result, Locale::En).unwrap()
    );
}
