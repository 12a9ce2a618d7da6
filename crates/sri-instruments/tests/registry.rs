use std::collections::HashSet;

use sri_instruments::item::OptionSet;
use sri_instruments::{all_scales, get_scale, get_scales};

#[test]
fn scale_ids_are_unique() {
    let scales = all_scales();
    let ids: HashSet<_> = scales.iter().map(|s| s.id().to_string()).collect();
    assert_eq!(ids.len(), scales.len());
}

#[test]
fn question_ids_are_unique_within_each_scale() {
    for scale in all_scales() {
        let ids: HashSet<_> = scale.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), scale.questions().len(), "duplicate id in {}", scale.id());
    }
}

#[test]
fn every_scale_has_positive_weights_and_items() {
    for scale in all_scales() {
        assert!(!scale.questions().is_empty(), "{} has no items", scale.id());
        assert!(!scale.weights().is_empty(), "{} feeds no dimension", scale.id());
        assert!(scale.weights().iter().all(|w| w.weight > 0.0));
    }
}

#[test]
fn brief_forms_are_subsets_of_full_forms() {
    for (brief, full) in [
        ("sos_brief", "sos"),
        ("mosher_brief", "mosher_guilt"),
        ("sexual_anxiety_brief", "sexual_anxiety"),
    ] {
        let brief = get_scale(brief).unwrap();
        let full = get_scale(full).unwrap();
        assert!(brief.questions().len() < full.questions().len());
        for q in brief.questions() {
            assert_eq!(full.question(&q.id), Some(q));
        }
    }
}

#[test]
fn options_match_option_set_range() {
    for scale in all_scales() {
        for q in scale.questions() {
            let values: Vec<_> = q.options.iter().map(|o| o.value).collect();
            let expected: Vec<_> = (q.min_value()..=q.max_value()).collect();
            assert_eq!(values, expected, "{}", q.id);
        }
    }
}

#[test]
fn reverse_coding_mirrors_the_range() {
    let kiss = get_scale("kiss9").unwrap();
    let reversed = kiss.question("kiss9_09").unwrap();
    assert!(reversed.reverse);
    assert_eq!(reversed.option_set, OptionSet::Frequency5);
    assert_eq!(reversed.scored_value(0), 4.0);
    assert_eq!(reversed.scored_value(4), 0.0);

    let straight = kiss.question("kiss9_01").unwrap();
    assert_eq!(straight.scored_value(3), 3.0);
}

#[test]
fn raw_score_is_mean_of_answered_items() {
    let scale = get_scale("body_shame").unwrap();
    // body_03 is reverse-coded (1..=5): 5 scores as 1. body_06 is optional and left blank.
    let values = [Some(4), Some(2), Some(5), Some(3), Some(1), None];
    let raw = scale.raw_score(&values).unwrap();
    assert!((raw - (4.0 + 2.0 + 1.0 + 3.0 + 1.0) / 5.0).abs() < 1e-12);

    assert_eq!(scale.raw_score(&[None; 6]), None);
}

#[test]
fn get_scales_preserves_order_and_rejects_unknown() {
    let scales = get_scales(&["kiss9", "sos"]).unwrap();
    assert_eq!(scales[0].id(), "kiss9");
    assert_eq!(scales[1].id(), "sos");
    assert!(get_scales(&["kiss9", "nope"]).is_err());
}
