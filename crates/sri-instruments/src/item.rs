use serde::{Deserialize, Serialize};
use sri_core::models::results::Dimension;
use ts_rs::TS;

/// The answer format a question uses. Option values are stable and
/// language-independent; labels are resolved per locale by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OptionSet {
    /// 1–7, strongly disagree to strongly agree.
    Agree7,
    /// 1–5, strongly disagree to strongly agree.
    Likert5,
    /// 0–4, never to almost always.
    Frequency5,
    /// 1–4, strongly disagree to strongly agree (SIS/SES format).
    Sis4,
}

impl OptionSet {
    pub fn min_value(self) -> i32 {
        match self {
            OptionSet::Frequency5 => 0,
            OptionSet::Agree7 | OptionSet::Likert5 | OptionSet::Sis4 => 1,
        }
    }

    pub fn max_value(self) -> i32 {
        match self {
            OptionSet::Agree7 => 7,
            OptionSet::Likert5 => 5,
            OptionSet::Frequency5 => 4,
            OptionSet::Sis4 => 4,
        }
    }

    /// Canonical (English) labels, lowest value first.
    pub fn canonical_labels(self) -> &'static [&'static str] {
        match self {
            OptionSet::Agree7 => &[
                "Strongly disagree",
                "Disagree",
                "Somewhat disagree",
                "Neutral",
                "Somewhat agree",
                "Agree",
                "Strongly agree",
            ],
            OptionSet::Likert5 => &[
                "Strongly disagree",
                "Disagree",
                "Neutral",
                "Agree",
                "Strongly agree",
            ],
            OptionSet::Frequency5 => &["Never", "Rarely", "Sometimes", "Often", "Almost always"],
            OptionSet::Sis4 => &["Strongly disagree", "Disagree", "Agree", "Strongly agree"],
        }
    }

    pub fn options(self) -> Vec<QuestionOption> {
        (self.min_value()..=self.max_value())
            .zip(self.canonical_labels())
            .map(|(value, label)| QuestionOption {
                value,
                label: label.to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub value: i32,
    pub label: String,
}

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Unique across the whole registry.
    pub id: String,
    pub text: String,
    pub description: Option<String>,
    pub required: bool,
    pub option_set: OptionSet,
    pub options: Vec<QuestionOption>,
    /// Reverse-coded: scored as `(max + min) - value`.
    pub reverse: bool,
}

impl Question {
    pub fn new(id: &str, text: &str, option_set: OptionSet) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            description: None,
            required: true,
            option_set,
            options: option_set.options(),
            reverse: false,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn min_value(&self) -> i32 {
        self.option_set.min_value()
    }

    pub fn max_value(&self) -> i32 {
        self.option_set.max_value()
    }

    pub fn accepts(&self, value: i32) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// The value that enters the scale aggregate, after reverse-coding.
    pub fn scored_value(&self, value: i32) -> f64 {
        if self.reverse {
            f64::from(self.max_value() + self.min_value() - value)
        } else {
            f64::from(value)
        }
    }
}

/// How much one scale contributes to one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionWeight {
    pub dimension: Dimension,
    pub weight: f64,
}

pub const fn feeds(dimension: Dimension, weight: f64) -> DimensionWeight {
    DimensionWeight { dimension, weight }
}
