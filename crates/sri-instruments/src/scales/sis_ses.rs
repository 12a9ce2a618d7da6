use sri_core::models::results::Dimension;

use crate::Scale;
use crate::item::{DimensionWeight, OptionSet, Question, feeds};

/// SIS/SES-SF: Sexual Inhibition / Sexual Excitation Scales, short form.
/// 14 items on a 4-point scale: 6 excitation (SES, reverse-coded), 4
/// inhibition due to threat of performance failure (SIS1), 4 inhibition due
/// to threat of consequences (SIS2). Asks about partnered sexual
/// situations, so it is never selected for minors or the sexually
/// inexperienced.
pub struct SisSesSf;

impl Scale for SisSesSf {
    fn id(&self) -> &str {
        "sis_ses_sf"
    }

    fn name(&self) -> &str {
        "SIS/SES-SF"
    }

    fn description(&self) -> &str {
        "Sexual Inhibition/Excitation Scales short form: the dual control of arousal"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let q = |id, text| Question::new(id, text, OptionSet::Sis4);
            let ses = "Sexual excitation";
            let sis1 = "Inhibition: threat of performance failure";
            let sis2 = "Inhibition: threat of consequences";
            vec![
                q("sis_01", "When I think of someone I find sexually attractive, I easily become aroused.")
                    .reversed()
                    .with_description(ses),
                q("sis_02", "If I am worried about taking too long to become aroused, my arousal tends to fade.")
                    .with_description(sis1),
                q("sis_03", "If I think I might be discovered while having sex, I am unlikely to stay aroused.")
                    .with_description(sis2),
                q("sis_04", "When I see others being intimate, I feel like having sex myself.")
                    .reversed()
                    .with_description(ses),
                q("sis_05", "If I am distracted during sex, I easily lose my arousal.")
                    .with_description(sis1),
                q("sis_06", "If there is a risk of unwanted pregnancy or infection, I am unlikely to get aroused.")
                    .with_description(sis2),
                q("sis_07", "Being with a partner who is sexually eager makes me very aroused.")
                    .reversed()
                    .with_description(ses),
                q("sis_08", "Once I am aroused, I need to concentrate to stay that way.")
                    .with_description(sis1),
                q("sis_09", "If I could be seen by others during sex, I would lose my arousal.")
                    .with_description(sis2),
                q("sis_10", "An attractive voice is enough to make me feel aroused.")
                    .reversed()
                    .with_description(ses),
                q("sis_11", "I have trouble staying aroused unless everything feels just right.")
                    .with_description(sis1),
                q("sis_12", "If I realize someone might hear us, my arousal disappears.")
                    .with_description(sis2),
                q("sis_13", "Sexual fantasies arouse me quickly.")
                    .reversed()
                    .with_description(ses),
                q("sis_14", "Being touched in a sexual way makes me aroused very easily.")
                    .reversed()
                    .with_description(ses),
            ]
        });
        &QUESTIONS
    }

    fn weights(&self) -> &[DimensionWeight] {
        static WEIGHTS: [DimensionWeight; 1] = [feeds(Dimension::Inhibition, 1.0)];
        &WEIGHTS
    }
}
