//! Interpretation and recommendation text.
//!
//! Text is selected by level and by the dimensions that deviate most from
//! the population mean, then rendered through Tera templates. Output order
//! is fixed for a given `Sri` and locale.

use sri_core::models::results::{Dimension, DimensionScores, Sri, SriLevel};
use sri_instruments::i18n::Locale;
use tera::{Context, Tera};

use crate::error::NarrativeError;

/// Distance from 50 at which a dimension counts as deviating.
pub const DEVIATION_THRESHOLD: f64 = 10.0;

/// At most this many deviating dimensions are described.
pub const MAX_HIGHLIGHTS: usize = 2;

/// Dimension score from which dimension-specific advice is added.
pub const ELEVATED_SCORE: f64 = 60.0;

struct Catalog {
    levels: [&'static str; 5],
    high: [&'static str; 4],
    low: [&'static str; 4],
    balanced: &'static str,
    interpret_closing: &'static str,
    advice: [&'static [&'static str]; 5],
    dimension_advice: [&'static str; 4],
    recommend_closing: &'static str,
}

const EN: Catalog = Catalog {
    levels: [
        "Your SRI score is {{ total }} (percentile {{ percentile }}), in the very low range. You appear to relate to sexuality with openness and little internal conflict.",
        "Your SRI score is {{ total }} (percentile {{ percentile }}), in the low range. Your attitudes toward sexuality are generally relaxed, with occasional hesitation in specific situations.",
        "Your SRI score is {{ total }} (percentile {{ percentile }}), in the moderate range. You hold a mix of open and reserved attitudes toward sexuality, similar to most people in the reference population.",
        "Your SRI score is {{ total }} (percentile {{ percentile }}), in the high range. Sexual thoughts and situations are often accompanied by discomfort, guilt, or restraint.",
        "Your SRI score is {{ total }} (percentile {{ percentile }}), in the very high range. Sexuality appears to be a significant source of internal conflict that may affect your wellbeing and relationships.",
    ],
    high: [
        "Erotophobia ({{ score }}) is above average: sexual cues tend to evoke more negative than positive feelings for you.",
        "Sex guilt ({{ score }}) is above average: you may judge your own desires against strict internal standards.",
        "Sexual shame ({{ score }}) is above average: parts of your sexuality may feel like something to hide.",
        "Sexual inhibition ({{ score }}) is above average: worry or distraction readily dampens your arousal.",
    ],
    low: [
        "Erotophobia ({{ score }}) is below average: you tend to respond to sexual cues with curiosity and comfort.",
        "Sex guilt ({{ score }}) is below average: your sexual desires rarely conflict with your moral self-image.",
        "Sexual shame ({{ score }}) is below average: you feel largely accepting of your sexual self.",
        "Sexual inhibition ({{ score }}) is below average: arousal is seldom disrupted by worry about performance or consequences.",
    ],
    balanced: "Your four dimension scores are close to the population average, with no single area standing out.",
    interpret_closing: "This result describes tendencies for self-reflection, not a diagnosis.",
    advice: [
        &["Keep nurturing the open communication and self-acceptance you already show."],
        &["Notice the specific situations where hesitation appears; they are good starting points for reflection."],
        &["Reflect on where your more reserved attitudes came from and whether they still serve you."],
        &[
            "Consider reading evidence-based sex education material to examine beliefs absorbed earlier in life.",
            "Talking with a trusted partner or friend about these feelings can lighten them.",
        ],
        &[
            "Consider speaking with a qualified sex therapist or counselor who can help you work through guilt and shame safely.",
            "Be patient with yourself: long-held attitudes change gradually.",
        ],
    ],
    dimension_advice: [
        "Gradual, self-paced exposure to sex-positive information can ease negative reactions to sexual cues.",
        "Examine which of your rules about sex are your own values and which were handed to you.",
        "Self-compassion exercises can soften the sense that your sexuality is something to hide.",
        "Mindfulness-based practices can help keep attention on sensation rather than on worry.",
    ],
    recommend_closing: "If any part of this assessment caused distress, consider reaching out to a mental health professional.",
};

const ZH: Catalog = Catalog {
    levels: [
        "你的 SRI 得分为 {{ total }}（百分位 {{ percentile }}），处于很低水平。你对性持开放态度，内心冲突很少。",
        "你的 SRI 得分为 {{ total }}（百分位 {{ percentile }}），处于较低水平。你对性的态度总体放松，仅在特定情境中偶有犹豫。",
        "你的 SRI 得分为 {{ total }}（百分位 {{ percentile }}），处于中等水平。你对性既有开放的一面也有保守的一面，与参照人群中的大多数人相近。",
        "你的 SRI 得分为 {{ total }}（百分位 {{ percentile }}），处于较高水平。性相关的想法和情境常伴随不适、内疚或克制。",
        "你的 SRI 得分为 {{ total }}（百分位 {{ percentile }}），处于很高水平。性似乎是你内心冲突的重要来源，可能影响身心健康与亲密关系。",
    ],
    high: [
        "性恐惧（{{ score }}）高于平均：性相关线索更容易引发你的负面感受。",
        "性内疚（{{ score }}）高于平均：你可能以严格的内在标准评判自己的欲望。",
        "性羞耻（{{ score }}）高于平均：你可能觉得自己性的某些部分需要隐藏。",
        "性抑制（{{ score }}）高于平均：担忧或分心很容易削弱你的性唤起。",
    ],
    low: [
        "性恐惧（{{ score }}）低于平均：你倾向于以好奇和自在回应性相关线索。",
        "性内疚（{{ score }}）低于平均：你的性欲望很少与道德自我形象冲突。",
        "性羞耻（{{ score }}）低于平均：你对自己的性基本持接纳态度。",
        "性抑制（{{ score }}）低于平均：你的性唤起很少因对表现或后果的担忧而中断。",
    ],
    balanced: "你的四个维度得分都接近人群平均水平，没有特别突出的方面。",
    interpret_closing: "本结果描述的是供自我反思的倾向，并非诊断。",
    advice: [
        &["继续保持你已有的开放沟通与自我接纳。"],
        &["留意那些让你犹豫的具体情境，它们是自我反思的良好起点。"],
        &["想一想你较为保守的态度从何而来，以及它们是否仍然适合你。"],
        &[
            "可以阅读循证的性教育资料，重新审视早年习得的观念。",
            "与信任的伴侣或朋友谈谈这些感受，可以减轻它们的分量。",
        ],
        &[
            "建议咨询合格的性治疗师或心理咨询师，在安全的环境中处理内疚与羞耻。",
            "对自己保持耐心：长期形成的态度需要逐步改变。",
        ],
    ],
    dimension_advice: [
        "循序渐进、按自己节奏接触性积极的信息，可以缓解对性线索的负面反应。",
        "分辨你关于性的规则中，哪些是自己的价值观，哪些是被灌输的。",
        "自我关怀练习可以减轻“自己的性需要隐藏”的感受。",
        "正念练习有助于把注意力放在感受上，而不是担忧上。",
    ],
    recommend_closing: "如果本次评估的任何部分让你感到困扰，请考虑联系心理健康专业人士。",
};

fn catalog(locale: Locale) -> &'static Catalog {
    match locale {
        Locale::En => &EN,
        Locale::Zh => &ZH,
    }
}

fn locale_key(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "en",
        Locale::Zh => "zh",
    }
}

fn level_index(level: SriLevel) -> usize {
    match level {
        SriLevel::VeryLow => 0,
        SriLevel::Low => 1,
        SriLevel::Moderate => 2,
        SriLevel::High => 3,
        SriLevel::VeryHigh => 4,
    }
}

fn dimension_index(dimension: Dimension) -> usize {
    match dimension {
        Dimension::Sos => 0,
        Dimension::Guilt => 1,
        Dimension::Shame => 2,
        Dimension::Inhibition => 3,
    }
}

/// Dimensions whose score is at least [`DEVIATION_THRESHOLD`] away from 50,
/// largest deviation first, ties in [`Dimension::ALL`] order, at most
/// [`MAX_HIGHLIGHTS`].
pub fn deviating_dimensions(scores: &DimensionScores) -> Vec<(Dimension, f64)> {
    let mut deviating: Vec<(Dimension, f64)> = scores
        .iter()
        .filter(|(_, score)| (score - 50.0).abs() >= DEVIATION_THRESHOLD)
        .collect();
    // Stable sort keeps the fixed dimension order among equal deviations.
    deviating.sort_by(|a, b| (b.1 - 50.0).abs().total_cmp(&(a.1 - 50.0).abs()));
    deviating.truncate(MAX_HIGHLIGHTS);
    deviating
}

pub struct Narrator {
    tera: Tera,
}

impl Narrator {
    pub fn new() -> Result<Self, NarrativeError> {
        let mut templates: Vec<(String, &'static str)> = Vec::new();
        for locale in [Locale::En, Locale::Zh] {
            let key = locale_key(locale);
            let cat = catalog(locale);
            for level in SriLevel::ALL {
                let i = level_index(level);
                templates.push((format!("{key}/level/{}", level.key()), cat.levels[i]));
                for (n, text) in cat.advice[i].iter().enumerate() {
                    templates.push((format!("{key}/advice/{}/{n}", level.key()), text));
                }
            }
            for dimension in Dimension::ALL {
                let i = dimension_index(dimension);
                templates.push((format!("{key}/high/{}", dimension.key()), cat.high[i]));
                templates.push((format!("{key}/low/{}", dimension.key()), cat.low[i]));
                templates.push((
                    format!("{key}/dimension_advice/{}", dimension.key()),
                    cat.dimension_advice[i],
                ));
            }
            templates.push((format!("{key}/balanced"), cat.balanced));
            templates.push((format!("{key}/interpret_closing"), cat.interpret_closing));
            templates.push((format!("{key}/recommend_closing"), cat.recommend_closing));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(templates)
            .map_err(|e| NarrativeError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Interpretation paragraphs: overall level, then up to two deviating
    /// dimensions (or a balanced-profile note), then a closing note.
    pub fn interpret(&self, sri: &Sri, locale: Locale) -> Result<Vec<String>, NarrativeError> {
        let key = locale_key(locale);
        let context = base_context(sri);
        let mut out = vec![self.render(&format!("{key}/level/{}", sri.level.key()), &context)?];

        let deviating = deviating_dimensions(&sri.dimension_scores);
        if deviating.is_empty() {
            out.push(self.render(&format!("{key}/balanced"), &context)?);
        }
        for (dimension, score) in deviating {
            let direction = if score >= 50.0 { "high" } else { "low" };
            let mut ctx = context.clone();
            ctx.insert("score", &(score.round() as i64));
            out.push(self.render(&format!("{key}/{direction}/{}", dimension.key()), &ctx)?);
        }

        out.push(self.render(&format!("{key}/interpret_closing"), &context)?);
        Ok(out)
    }

    /// Recommendations: level advice, then advice for each elevated
    /// dimension in fixed order, then a closing note.
    pub fn recommend(&self, sri: &Sri, locale: Locale) -> Result<Vec<String>, NarrativeError> {
        let key = locale_key(locale);
        let context = base_context(sri);
        let advice_count = catalog(locale).advice[level_index(sri.level)].len();

        let mut out = Vec::new();
        for n in 0..advice_count {
            out.push(self.render(&format!("{key}/advice/{}/{n}", sri.level.key()), &context)?);
        }
        for (dimension, score) in sri.dimension_scores.iter() {
            if score >= ELEVATED_SCORE {
                out.push(self.render(
                    &format!("{key}/dimension_advice/{}", dimension.key()),
                    &context,
                )?);
            }
        }
        out.push(self.render(&format!("{key}/recommend_closing"), &context)?);
        Ok(out)
    }

    fn render(&self, name: &str, context: &Context) -> Result<String, NarrativeError> {
        Ok(self.tera.render(name, context)?)
    }
}

fn base_context(sri: &Sri) -> Context {
    let mut context = Context::new();
    // Whole numbers so templates print "52", not "52.0".
    context.insert("total", &(sri.total_score.round() as i64));
    context.insert("percentile", &(sri.percentile.round() as i64));
    context.insert("level", sri.level.key());
    context
}
