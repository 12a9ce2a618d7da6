use sri_core::models::results::Dimension;

use crate::Scale;
use crate::item::{DimensionWeight, OptionSet, Question, feeds};

/// Sexual anxiety. 5-point agreement. Does not presuppose sexual
/// experience, so it stands in for SIS/SES-SF where that scale is
/// inapplicable. Feeds inhibition and, to a lesser degree, guilt.
pub struct SexualAnxiety;

/// Four-item form used in quick mode.
pub struct SexualAnxietyBrief;

const BRIEF_ITEMS: [&str; 4] = ["anxiety_01", "anxiety_03", "anxiety_04", "anxiety_08"];

static WEIGHTS: [DimensionWeight; 2] = [
    feeds(Dimension::Inhibition, 0.6),
    feeds(Dimension::Guilt, 0.4),
];

fn items() -> Vec<Question> {
    let q = |id, text| Question::new(id, text, OptionSet::Likert5);
    vec![
        q("anxiety_01", "I feel nervous when I think about sexual situations."),
        q("anxiety_02", "I worry about not performing well sexually."),
        q("anxiety_03", "I feel at ease when sexual topics come up.").reversed(),
        q("anxiety_04", "The idea of sexual intimacy makes me tense."),
        q("anxiety_05", "I worry about being rejected if I express romantic or sexual interest."),
        q("anxiety_06", "I feel calm imagining a close physical moment with someone.").reversed(),
        q("anxiety_07", "Intimate situations make my heart race with anxiety rather than excitement."),
        q("anxiety_08", "I avoid situations that could become sexual."),
    ]
}

impl Scale for SexualAnxiety {
    fn id(&self) -> &str {
        "sexual_anxiety"
    }

    fn name(&self) -> &str {
        "Sexual Anxiety"
    }

    fn description(&self) -> &str {
        "Anticipatory anxiety about sexual and intimate situations"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(items);
        &QUESTIONS
    }

    fn weights(&self) -> &[DimensionWeight] {
        &WEIGHTS
    }
}

impl Scale for SexualAnxietyBrief {
    fn id(&self) -> &str {
        "sexual_anxiety_brief"
    }

    fn name(&self) -> &str {
        "Sexual Anxiety (brief)"
    }

    fn description(&self) -> &str {
        "Four-item sexual anxiety short form"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            items()
                .into_iter()
                .filter(|q| BRIEF_ITEMS.contains(&q.id.as_str()))
                .collect()
        });
        &QUESTIONS
    }

    fn weights(&self) -> &[DimensionWeight] {
        &WEIGHTS
    }
}
