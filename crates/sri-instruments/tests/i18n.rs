use sri_instruments::{all_scales, get_scale};
use sri_instruments::i18n::{Locale, localize_scale, option_label};

#[test]
fn option_labels_are_looked_up_by_value() {
    assert_eq!(
        option_label("kiss9", "kiss9_01", 0, Locale::En).unwrap().as_deref(),
        Some("Never")
    );
    assert_eq!(
        option_label("kiss9", "kiss9_01", 4, Locale::Zh).unwrap().as_deref(),
        Some("几乎总是")
    );
    assert_eq!(option_label("kiss9", "kiss9_01", 9, Locale::En).unwrap(), None);
}

#[test]
fn unknown_ids_are_errors() {
    assert!(option_label("nope", "kiss9_01", 1, Locale::En).is_err());
    assert!(option_label("kiss9", "sos_01", 1, Locale::En).is_err());
}

#[test]
fn localization_never_changes_scoring_fields() {
    let canonical = get_scale("sis_ses_sf").unwrap();
    let zh = localize_scale("sis_ses_sf", Locale::Zh).unwrap();
    assert_eq!(zh.name, "性抑制/性兴奋量表简版");
    for (original, localized) in canonical.questions().iter().zip(&zh.questions) {
        assert_eq!(original.id, localized.id);
        assert_eq!(original.reverse, localized.reverse);
        assert_eq!(original.required, localized.required);
        let values: Vec<_> = localized.options.iter().map(|o| o.value).collect();
        let canonical_values: Vec<_> = original.options.iter().map(|o| o.value).collect();
        assert_eq!(values, canonical_values);
    }
}

#[test]
fn every_question_has_chinese_text() {
    for scale in all_scales() {
        let zh = localize_scale(scale.id(), Locale::Zh).unwrap();
        assert_ne!(zh.name, scale.name(), "scale {}", scale.id());
        for (original, localized) in scale.questions().iter().zip(&zh.questions) {
            assert_ne!(original.text, localized.text, "question {}", original.id);
            assert!(!localized.text.is_ascii(), "question {}", original.id);
        }
    }

    let sos = localize_scale("sos", Locale::Zh).unwrap();
    assert_eq!(sos.questions[0].text, "观看色情内容对我来说会是一种愉快的体验。");
    assert_eq!(sos.questions[0].options[3].label, "中立");
}

#[test]
fn english_localization_is_canonical() {
    let en = localize_scale("kiss9", Locale::En).unwrap();
    let canonical = get_scale("kiss9").unwrap();
    assert_eq!(en.name, canonical.name());
    assert_eq!(en.questions, canonical.questions());
}
