use sri_core::models::results::Dimension;

use crate::Scale;
use crate::item::{DimensionWeight, OptionSet, Question, feeds};

/// KISS-9: Kyle Inventory of Sexual Shame, nine items.
/// Frequency format, 0 (never) – 4 (almost always). Used in both modes.
pub struct Kiss9;

impl Scale for Kiss9 {
    fn id(&self) -> &str {
        "kiss9"
    }

    fn name(&self) -> &str {
        "KISS-9"
    }

    fn description(&self) -> &str {
        "Kyle Inventory of Sexual Shame: how often sexuality is felt as shameful"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let q = |id, text| Question::new(id, text, OptionSet::Frequency5);
            vec![
                q("kiss9_01", "I feel ashamed of my sexual thoughts."),
                q("kiss9_02", "I feel that my sexual desires are dirty."),
                q("kiss9_03", "I hide my sexual feelings from others out of embarrassment."),
                q("kiss9_04", "I feel humiliated when I think about my sexual experiences."),
                q("kiss9_05", "I worry that people would judge me if they knew about my sexuality."),
                q("kiss9_06", "I feel bad about my body in sexual situations."),
                q("kiss9_07", "I feel there is something wrong with me sexually."),
                q("kiss9_08", "I feel unworthy of sexual pleasure."),
                q("kiss9_09", "I feel comfortable with my sexuality.").reversed(),
            ]
        });
        &QUESTIONS
    }

    fn weights(&self) -> &[DimensionWeight] {
        static WEIGHTS: [DimensionWeight; 1] = [feeds(Dimension::Shame, 1.0)];
        &WEIGHTS
    }
}
