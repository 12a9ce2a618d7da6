use sri_core::models::results::Dimension;

use crate::Scale;
use crate::item::{DimensionWeight, OptionSet, Question, feeds};

/// SOS: Sexual Opinion Survey. Erotophobia–erotophilia.
/// Erotophilic statements are reverse-coded so a higher raw score means
/// more erotophobic. 7-point agreement.
pub struct Sos;

/// Six-item SOS short form used in quick mode.
pub struct SosBrief;

const BRIEF_ITEMS: [&str; 6] = ["sos_01", "sos_02", "sos_04", "sos_05", "sos_08", "sos_10"];

static WEIGHTS: [DimensionWeight; 1] = [feeds(Dimension::Sos, 1.0)];

fn items() -> Vec<Question> {
    let q = |id, text| Question::new(id, text, OptionSet::Agree7);
    vec![
        q("sos_01", "Looking at erotic material would be an enjoyable experience for me.").reversed(),
        q("sos_02", "Thinking about sexual topics makes me uncomfortable."),
        q("sos_03", "I feel relaxed when a conversation turns to sex.").reversed(),
        q("sos_04", "Sexual fantasies are something I would rather avoid."),
        q("sos_05", "Exploring new sexual experiences sounds exciting to me.").reversed(),
        q("sos_06", "I would feel disgusted reading a sexually explicit story."),
        q("sos_07", "Masturbation can be a healthy way to enjoy oneself.").reversed(),
        q("sos_08", "I avoid films or books with sexual content."),
        q("sos_09", "It is natural for people to be curious about sex.").reversed(),
        q("sos_10", "Sexual arousal is a feeling I try to suppress."),
        q("sos_11", "I enjoy feeling sexually attractive.").reversed(),
        q("sos_12", "Discussing sex openly with a partner would embarrass me."),
    ]
}

impl Scale for Sos {
    fn id(&self) -> &str {
        "sos"
    }

    fn name(&self) -> &str {
        "SOS"
    }

    fn description(&self) -> &str {
        "Sexual Opinion Survey: emotional orientation toward sexual cues"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(items);
        &QUESTIONS
    }

    fn weights(&self) -> &[DimensionWeight] {
        &WEIGHTS
    }
}

impl Scale for SosBrief {
    fn id(&self) -> &str {
        "sos_brief"
    }

    fn name(&self) -> &str {
        "SOS (brief)"
    }

    fn description(&self) -> &str {
        "Six-item Sexual Opinion Survey short form"
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
