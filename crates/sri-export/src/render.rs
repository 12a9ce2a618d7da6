use serde::Serialize;
use sri_core::models::results::{Dimension, SriLevel};
use sri_core::models::session::AssessmentSession;
use sri_instruments::i18n::{Locale, localize_scale};
use tera::{Context, Tera};

use crate::error::ExportError;

const REPORT_EN: &str = r#"SRI Assessment Report
=====================
Session:   {{ session_id }}
Mode:      {{ mode }}
Started:   {{ started }}
Completed: {{ completed }}

SRI score: {{ total }} / 100 ({{ level }}, percentile {{ percentile }})

Dimensions
{% for d in dimensions %}  {{ d.label }}: {{ d.score }}
{% endfor %}
Scales
{% for s in scales %}  {{ s.name }}: raw {{ s.raw }}, z {{ s.z }}
{% endfor %}
Interpretation
{% for line in interpretation %}  - {{ line }}
{% endfor %}
Recommendations
{% for line in recommendations %}  - {{ line }}
{% endfor %}"#;

const REPORT_ZH: &str = r#"SRI 评估报告
============
会话：{{ session_id }}
模式：{{ mode }}
开始：{{ started }}
完成：{{ completed }}

SRI 得分：{{ total }} / 100（{{ level }}，百分位 {{ percentile }}）

维度
{% for d in dimensions %}  {{ d.label }}：{{ d.score }}
{% endfor %}
量表
{% for s in scales %}  {{ s.name }}：原始分 {{ s.raw }}，z {{ s.z }}
{% endfor %}
解读
{% for line in interpretation %}  - {{ line }}
{% endfor %}
建议
{% for line in recommendations %}  - {{ line }}
{% endfor %}"#;

#[derive(Debug, Serialize)]
struct DimensionView {
    key: &'static str,
    label: &'static str,
    score: i64,
}

#[derive(Debug, Serialize)]
struct ScaleView {
    id: String,
    name: String,
    raw: String,
    z: String,
}

/// Template context for one scored session. Numbers are pre-formatted.
#[derive(Debug, Serialize)]
struct ReportView<'a> {
    session_id: String,
    mode: &'static str,
    started: String,
    completed: String,
    total: i64,
    percentile: i64,
    level: &'static str,
    level_key: &'static str,
    dimensions: Vec<DimensionView>,
    scales: Vec<ScaleView>,
    interpretation: &'a [String],
    recommendations: &'a [String],
}

pub fn level_label(level: SriLevel, locale: Locale) -> &'static str {
    match (level, locale) {
        (SriLevel::VeryLow, Locale::En) => "very low",
        (SriLevel::Low, Locale::En) => "low",
        (SriLevel::Moderate, Locale::En) => "moderate",
        (SriLevel::High, Locale::En) => "high",
        (SriLevel::VeryHigh, Locale::En) => "very high",
        (SriLevel::VeryLow, Locale::Zh) => "很低",
        (SriLevel::Low, Locale::Zh) => "较低",
        (SriLevel::Moderate, Locale::Zh) => "中等",
        (SriLevel::High, Locale::Zh) => "较高",
        (SriLevel::VeryHigh, Locale::Zh) => "很高",
    }
}

pub fn dimension_label(dimension: Dimension, locale: Locale) -> &'static str {
    match (dimension, locale) {
        (Dimension::Sos, Locale::En) => "Erotophobia",
        (Dimension::Guilt, Locale::En) => "Sex guilt",
        (Dimension::Shame, Locale::En) => "Sexual shame",
        (Dimension::Inhibition, Locale::En) => "Sexual inhibition",
        (Dimension::Sos, Locale::Zh) => "性恐惧",
        (Dimension::Guilt, Locale::Zh) => "性内疚",
        (Dimension::Shame, Locale::Zh) => "性羞耻",
        (Dimension::Inhibition, Locale::Zh) => "性抑制",
    }
}

fn build_view(session: &AssessmentSession, locale: Locale) -> Result<ReportView<'_>, ExportError> {
    let results = session
        .results
        .as_ref()
        .ok_or(ExportError::NotScored(session.id))?;
    let sri = &results.sri;

    let scales = sri
        .scale_scores
        .iter()
        .map(|s| {
            let name = localize_scale(&s.scale_id, locale)
                .map(|l| l.name)
                .unwrap_or_else(|| s.scale_id.clone());
            ScaleView {
                id: s.scale_id.clone(),
                name,
                raw: format!("{:.2}", s.raw_score),
                z: format!("{:+.2}", s.z_score),
            }
        })
        .collect();

    Ok(ReportView {
        session_id: session.id.to_string(),
        mode: session.mode.as_str(),
        started: session.start_time.to_string(),
        completed: session
            .end_time
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string()),
        total: sri.total_score.round() as i64,
        percentile: sri.percentile.round() as i64,
        level: level_label(sri.level, locale),
        level_key: sri.level.key(),
        dimensions: sri
            .dimension_scores
            .iter()
            .map(|(d, score)| DimensionView {
                key: d.key(),
                label: dimension_label(d, locale),
                score: score.round() as i64,
            })
            .collect(),
        scales,
        interpretation: &results.interpretation,
        recommendations: &results.recommendations,
    })
}

/// Render the built-in plain-text report for a scored session.
pub fn render_report(session: &AssessmentSession, locale: Locale) -> Result<String, ExportError> {
    let (name, content) = match locale {
        Locale::En => ("report_en", REPORT_EN),
        Locale::Zh => ("report_zh", REPORT_ZH),
    };
    render_template(name, content, session, locale)
}

/// Render a caller-supplied Tera template with the report context.
///
/// Available variables: `session_id`, `mode`, `started`, `completed`,
/// `total`, `percentile`, `level`, `level_key`, `dimensions` (`key`,
/// `label`, `score`), `scales` (`id`, `name`, `raw`, `z`),
/// `interpretation`, `recommendations`.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    session: &AssessmentSession,
    locale: Locale,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let view = build_view(session, locale)?;
    let context =
        Context::from_serialize(&view).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
