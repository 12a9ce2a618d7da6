//! Display-text localization for scales.
//!
//! Translation is a pure lookup keyed by stable identifiers: scale id,
//! question id, and option value. The locale is always an explicit
//! argument. Nothing here feeds scoring. Missing translations fall back to
//! the canonical English text.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::get_scale;
use crate::item::{OptionSet, Question, QuestionOption};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

/// A scale with its display text resolved for one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LocalizedScale {
    pub id: String,
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
}

pub fn localize_scale(scale_id: &str, locale: Locale) -> Option<LocalizedScale> {
    let scale = get_scale(scale_id)?;
    let (name, description) = match locale {
        Locale::Zh => zh_scale_text(scale_id)
            .map(|(n, d)| (n.to_string(), d.to_string()))
            .unwrap_or_else(|| (scale.name().to_string(), scale.description().to_string())),
        Locale::En => (scale.name().to_string(), scale.description().to_string()),
    };

    let questions = scale
        .questions()
        .iter()
        .map(|q| localize_question(q, locale))
        .collect();

    Some(LocalizedScale {
        id: scale_id.to_string(),
        name,
        description,
        questions,
    })
}

fn localize_question(question: &Question, locale: Locale) -> Question {
    let mut localized = question.clone();
    if locale == Locale::Zh
        && let Some(text) = zh_question_text(&question.id)
    {
        localized.text = text.to_string();
    }
    localized.options = question
        .options
        .iter()
        .map(|o| QuestionOption {
            value: o.value,
            label: set_label(question.option_set, o.value, locale)
                .map(str::to_string)
                .unwrap_or_else(|| o.label.clone()),
        })
        .collect();
    localized
}

/// Label of one option, looked up by `(scale_id, question_id, value)`.
pub fn option_label(
    scale_id: &str,
    question_id: &str,
    value: i32,
    locale: Locale,
) -> Result<Option<String>, InstrumentError> {
    let scale =
        get_scale(scale_id).ok_or_else(|| InstrumentError::UnknownScale(scale_id.to_string()))?;
    let question = scale
        .question(question_id)
        .ok_or_else(|| InstrumentError::UnknownQuestion {
            scale_id: scale_id.to_string(),
            question_id: question_id.to_string(),
        })?;
    Ok(set_label(question.option_set, value, locale).map(str::to_string))
}

fn set_label(set: OptionSet, value: i32, locale: Locale) -> Option<&'static str> {
    let index = usize::try_from(value - set.min_value()).ok()?;
    let labels: &[&str] = match locale {
        Locale::En => set.canonical_labels(),
        Locale::Zh => match set {
            OptionSet::Agree7 => &[
                "非常不同意",
                "不同意",
                "有点不同意",
                "中立",
                "有点同意",
                "同意",
                "非常同意",
            ],
            OptionSet::Likert5 => &["非常不同意", "不同意", "中立", "同意", "非常同意"],
            OptionSet::Frequency5 => &["从不", "很少", "有时", "经常", "几乎总是"],
            OptionSet::Sis4 => &["非常不同意", "不同意", "同意", "非常同意"],
        },
    };
    labels.get(index).copied()
}

fn zh_scale_text(scale_id: &str) -> Option<(&'static str, &'static str)> {
    let text = match scale_id {
        "sos" => ("性观念调查（SOS）", "对性相关线索的情绪取向：性恐惧与性喜好"),
        "sos_brief" => ("性观念调查（简版）", "六题版性观念调查"),
        "mosher_guilt" => ("莫舍性内疚量表", "修订版莫舍性内疚量表：内化的性内疚感"),
        "mosher_brief" => ("莫舍性内疚量表（简版）", "六题版性内疚量表"),
        "kiss9" => ("凯尔性羞耻量表（KISS-9）", "将性体验为羞耻的频率"),
        "sis_ses_sf" => ("性抑制/性兴奋量表简版", "性唤起的双重控制：抑制与兴奋"),
        "sexual_anxiety" => ("性焦虑量表", "对性与亲密情境的预期焦虑"),
        "sexual_anxiety_brief" => ("性焦虑量表（简版）", "四题版性焦虑量表"),
        "body_shame" => ("性身体羞耻量表", "亲密情境中对自身身体的不自在"),
        "partner_communication" => ("伴侣性沟通量表", "与伴侣讨论欲望与界限的开放程度"),
        _ => return None,
    };
    Some(text)
}

fn zh_question_text(question_id: &str) -> Option<&'static str> {
    let text = match question_id {
        "sos_01" => "观看色情内容对我来说会是一种愉快的体验。",
        "sos_02" => "想到与性有关的话题让我感到不自在。",
        "sos_03" => "当谈话转向性话题时，我感到放松。",
        "sos_04" => "性幻想是我宁愿回避的东西。",
        "sos_05" => "探索新的性体验对我来说听起来令人兴奋。",
        "sos_06" => "阅读露骨的性描写故事会让我感到厌恶。",
        "sos_07" => "自慰可以是一种健康的自我愉悦方式。",
        "sos_08" => "我会回避含有性内容的电影或书籍。",
        "sos_09" => "人们对性感到好奇是很自然的。",
        "sos_10" => "性唤起是我努力压抑的一种感受。",
        "sos_11" => "我喜欢感到自己有性吸引力。",
        "sos_12" => "与伴侣公开讨论性会让我尴尬。",
        "mosher_01" => "在稳定关系之外发生性行为是错误的。",
        "mosher_02" => "有了性想法之后，我会感到内疚。",
        "mosher_03" => "性快感没有什么值得感到愧疚的。",
        "mosher_04" => "自慰是一种道德缺陷。",
        "mosher_05" => "当我有性欲望时，我觉得应该克制它们。",
        "mosher_06" => "享受性会让一个人不那么有德行。",
        "mosher_07" => "婚前性行为是可以接受的。",
        "mosher_08" => "如果我按性冲动行事，我会觉得自己做错了事。",
        "mosher_09" => "我的性感受是我自身正常的一部分。",
        "mosher_10" => "性笑话让我感到被冒犯。",
        "mosher_11" => "不寻常的性行为令人恶心。",
        "mosher_12" => "我会因为性想法而在心里惩罚自己。",
        "sis_01" => "想到我觉得有性吸引力的人时，我很容易被唤起。",
        "sis_02" => "如果我担心唤起需要太长时间，我的唤起往往会消退。",
        "sis_03" => "如果我觉得性行为时可能被人发现，我很难保持唤起。",
        "sis_04" => "看到别人亲密时，我自己也会想要性。",
        "sis_05" => "如果性行为时分心，我很容易失去唤起。",
        "sis_06" => "如果有意外怀孕或感染的风险，我不太可能被唤起。",
        "sis_07" => "和性方面热情的伴侣在一起会让我非常兴奋。",
        "sis_08" => "一旦被唤起，我需要集中注意力才能保持。",
        "sis_09" => "如果性行为时可能被别人看到，我会失去唤起。",
        "sis_10" => "一个有吸引力的声音就足以让我感到兴奋。",
        "sis_11" => "除非一切都感觉恰到好处，否则我很难保持唤起。",
        "sis_12" => "如果意识到可能有人听到我们，我的唤起就会消失。",
        "sis_13" => "性幻想会让我很快被唤起。",
        "sis_14" => "被以性的方式触碰时，我很容易被唤起。",
        "body_01" => "被人看到裸体让我感到不自在。",
        "body_02" => "我不喜欢看自己的生殖器。",
        "body_03" => "我觉得自己的身体有吸引力。",
        "body_04" => "因为对身体感到自卑，我会回避被触碰。",
        "body_05" => "在亲密情境中，我会拿自己的身体和别人比较并觉得不如人。",
        "body_06" => "我更喜欢黑暗，这样我的身体就不会被看到。",
        "partner_01" => "我能告诉伴侣我在性方面喜欢什么。",
        "partner_02" => "和伴侣谈论性让我尴尬。",
        "partner_03" => "为了避免冲突，我把自己的性需求藏在心里。",
        "partner_04" => "对我不想要的性行为说不，我感到自在。",
        "partner_05" => "我和伴侣会公开讨论性健康。",
        "partner_06" => "为了避免尴尬的对话，我会假装享受性。",
        "kiss9_01" => "我为自己的性想法感到羞耻。",
        "kiss9_02" => "我觉得自己的性欲望是肮脏的。",
        "kiss9_03" => "我因为尴尬而向他人隐藏自己的性感受。",
        "kiss9_04" => "想到自己的性经历时，我感到屈辱。",
        "kiss9_05" => "我担心如果别人了解我的性取向或性观念，会评判我。",
        "kiss9_06" => "在性情境中，我对自己的身体感觉不好。",
        "kiss9_07" => "我觉得自己在性方面有什么不对劲。",
        "kiss9_08" => "我觉得自己不配享受性快感。",
        "kiss9_09" => "我对自己的性感到自在。",
        "anxiety_01" => "想到性相关情境时，我会感到紧张。",
        "anxiety_02" => "我担心自己在性方面表现不好。",
        "anxiety_03" => "谈到性话题时，我感到轻松。",
        "anxiety_04" => "想到性亲密会让我紧绷。",
        "anxiety_05" => "我担心表达恋爱或性方面的兴趣会被拒绝。",
        "anxiety_06" => "想象与某人亲密接触的时刻，我感到平静。",
        "anxiety_07" => "亲密情境让我心跳加速，更多是焦虑而不是兴奋。",
        "anxiety_08" => "我会避开可能发展为性行为的情境。",
        _ => return None,
    };
    Some(text)
}
