use sri_core::models::results::Dimension;

use crate::Scale;
use crate::item::{DimensionWeight, OptionSet, Question, feeds};

/// Mosher Sex-Guilt Inventory, revised short version.
/// 7-point agreement; permissive statements are reverse-coded.
pub struct MosherGuilt;

/// Six-item form used in quick mode.
pub struct MosherBrief;

const BRIEF_ITEMS: [&str; 6] = [
    "mosher_02",
    "mosher_03",
    "mosher_04",
    "mosher_05",
    "mosher_08",
    "mosher_12",
];

static WEIGHTS: [DimensionWeight; 1] = [feeds(Dimension::Guilt, 1.0)];

fn items() -> Vec<Question> {
    let q = |id, text| Question::new(id, text, OptionSet::Agree7);
    vec![
        q("mosher_01", "Sex outside a committed relationship is wrong."),
        q("mosher_02", "I feel guilty after having sexual thoughts."),
        q("mosher_03", "Sexual pleasure is nothing to feel bad about.").reversed(),
        q("mosher_04", "Masturbation is a moral failing."),
        q("mosher_05", "When I have sexual desires, I feel I should resist them."),
        q("mosher_06", "Enjoying sex makes a person less virtuous."),
        q("mosher_07", "Sexual relations before marriage are acceptable.").reversed(),
        q("mosher_08", "I would feel I had done something wrong if I acted on a sexual impulse."),
        q("mosher_09", "My sexual feelings are a normal part of who I am.").reversed(),
        q("mosher_10", "Sexual jokes are offensive to me."),
        q("mosher_11", "Unusual sexual practices are disgusting."),
        q("mosher_12", "I punish myself mentally for sexual thoughts."),
    ]
}

impl Scale for MosherGuilt {
    fn id(&self) -> &str {
        "mosher_guilt"
    }

    fn name(&self) -> &str {
        "Mosher Sex-Guilt"
    }

    fn description(&self) -> &str {
        "Revised Mosher Sex-Guilt Inventory: internalized guilt about sexuality"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(items);
        &QUESTIONS
    }

    fn weights(&self) -> &[DimensionWeight] {
        &WEIGHTS
    }
}

impl Scale for MosherBrief {
    fn id(&self) -> &str {
        "mosher_brief"
    }

    fn name(&self) -> &str {
        "Mosher Sex-Guilt (brief)"
    }

    fn description(&self) -> &str {
        "Six-item sex-guilt short form"
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
