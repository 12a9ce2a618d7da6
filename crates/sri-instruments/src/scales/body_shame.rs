use sri_core::models::results::Dimension;

use crate::Scale;
use crate::item::{DimensionWeight, OptionSet, Question, feeds};

/// Sexual body shame. 5-point agreement, full mode only.
pub struct BodyShame;

impl Scale for BodyShame {
    fn id(&self) -> &str {
        "body_shame"
    }

    fn name(&self) -> &str {
        "Sexual Body Shame"
    }

    fn description(&self) -> &str {
        "Self-consciousness about one's body in intimate contexts"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let q = |id, text| Question::new(id, text, OptionSet::Likert5);
            vec![
                q("body_01", "I feel uncomfortable being seen naked."),
                q("body_02", "I dislike looking at my own genitals."),
                q("body_03", "I feel attractive in my own body.").reversed(),
                q("body_04", "I avoid being touched because I am self-conscious about my body."),
                q("body_05", "I compare my body unfavourably with others in intimate situations."),
                q("body_06", "I prefer darkness so that my body cannot be seen.").optional(),
            ]
        });
        &QUESTIONS
    }

    fn weights(&self) -> &[DimensionWeight] {
        static WEIGHTS: [DimensionWeight; 1] = [feeds(Dimension::Shame, 1.0)];
        &WEIGHTS
    }
}
