use sri_core::models::results::Dimension;

use crate::Scale;
use crate::item::{DimensionWeight, OptionSet, Question, feeds};

/// Sexual communication with a partner. 5-point agreement, full mode
/// only, and only for adults with a partner.
pub struct PartnerCommunication;

impl Scale for PartnerCommunication {
    fn id(&self) -> &str {
        "partner_communication"
    }

    fn name(&self) -> &str {
        "Partner Sexual Communication"
    }

    fn description(&self) -> &str {
        "Openness in discussing desires and boundaries with a partner"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let q = |id, text| Question::new(id, text, OptionSet::Likert5);
            vec![
                q("partner_01", "I can tell my partner what I like sexually.").reversed(),
                q("partner_02", "Talking about sex with my partner embarrasses me."),
                q("partner_03", "I keep my sexual needs to myself to avoid conflict."),
                q("partner_04", "I feel comfortable saying no to sexual activity I don't want.").reversed(),
                q("partner_05", "My partner and I discuss sexual health openly.").reversed(),
                q("partner_06", "I pretend to enjoy sex to avoid an awkward conversation.").optional(),
            ]
        });
        &QUESTIONS
    }

    fn weights(&self) -> &[DimensionWeight] {
        static WEIGHTS: [DimensionWeight; 2] = [
            feeds(Dimension::Inhibition, 0.5),
            feeds(Dimension::Shame, 0.5),
        ];
        &WEIGHTS
    }
}
