use jiff::Timestamp;
use sri_core::models::demographics::{AgeBracket, Demographics};
use sri_core::models::response::Response;
use sri_core::models::results::{DimensionScores, Results, ScaleScore, Sri, SriLevel};
use sri_core::models::session::{AssessmentMode, AssessmentSession};
use sri_export::error::ExportError;
use sri_export::export::{export_all_csv, export_all_json, export_session_at};
use sri_export::render::{render_report, render_template};
use sri_instruments::i18n::Locale;

fn at(second: i64) -> Timestamp {
    Timestamp::from_second(second).unwrap()
}

fn scored(mode: AssessmentMode) -> AssessmentSession {
    let demographics = Demographics {
        age: AgeBracket::Adult,
        ..Demographics::default()
    };
    let mut session = AssessmentSession::started_at(mode, demographics, at(1_750_000_000));
    session.responses.upsert(Response::at("sos_01", 3, at(1_750_000_010)));
    session.responses.upsert(Response::at("kiss9_02", 1, at(1_750_000_020)));
    let results = Results {
        session_id: session.id,
        sri: Sri {
            total_score: 47.256,
            z_score: -0.07,
            percentile: 47.256,
            level: SriLevel::Moderate,
            dimension_scores: DimensionScores {
                sos: 52.4,
                guilt: 41.0,
                shame: 49.6,
                inhibition: 46.0,
            },
            scale_scores: vec![ScaleScore {
                scale_id: "kiss9".to_string(),
                raw_score: 1.75,
                z_score: -0.1667,
            }],
        },
        interpretation: vec!["First line.".to_string()],
        recommendations: vec!["Do this.".to_string()],
        calculated_at: at(1_750_000_600),
    };
    session.complete(results).unwrap()
}

#[test]
fn session_export_document() {
    let session = scored(AssessmentMode::Quick);
    let json = export_session_at(&session, at(1_760_000_000)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["sessionId"], session.id.to_string());
    assert_eq!(value["type"], "quick");
    assert_eq!(value["timestamp"], at(1_760_000_000).to_string());
    assert_eq!(value["demographics"]["age"], "adult");
    assert_eq!(value["responses"]["sos_01"], 3);
    assert_eq!(value["responses"]["kiss9_02"], 1);
    assert_eq!(value["results"]["sri"]["level"], "moderate");
}

#[test]
fn all_sessions_as_json_array() {
    let sessions = vec![scored(AssessmentMode::Quick), scored(AssessmentMode::Full)];
    let json = export_all_json(&sessions).unwrap();
    let parsed: Vec<AssessmentSession> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, sessions);
}

#[test]
fn csv_has_one_row_per_session() {
    let unscored = AssessmentSession::started_at(AssessmentMode::Full, Demographics::default(), at(1_000));
    let sessions = vec![scored(AssessmentMode::Quick), unscored.clone()];
    let csv = export_all_csv(&sessions).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "id,type,started,completed,total_score,level,sos,guilt,shame,inhibition"
    );
    assert!(lines[1].contains(",quick,"));
    assert!(lines[1].contains(",47.26,moderate,52.4,41.0,49.6,46.0"), "{}", lines[1]);
    assert!(lines[2].starts_with(&unscored.id.to_string()));
    assert!(lines[2].ends_with(",,,,,,,"), "{}", lines[2]);
}

#[test]
fn empty_csv_is_header_only() {
    let csv = export_all_csv(&[]).unwrap();
    assert_eq!(csv.lines().count(), 1);
    assert!(csv.starts_with("id,type,"));
}

#[test]
fn english_report() {
    let report = render_report(&scored(AssessmentMode::Full), Locale::En).unwrap();
    assert!(report.contains("SRI score: 47 / 100 (moderate, percentile 47)"));
    assert!(report.contains("Sex guilt: 41"));
    assert!(report.contains("KISS-9: raw 1.75, z -0.17"));
    assert!(report.contains("- First line."));
    assert!(report.contains("- Do this."));
}

#[test]
fn chinese_report() {
    let report = render_report(&scored(AssessmentMode::Full), Locale::Zh).unwrap();
    assert!(report.contains("SRI 得分：47 / 100（中等，百分位 47）"));
    assert!(report.contains("性内疚：41"));
}

#[test]
fn unscored_session_cannot_be_reported() {
    let session = AssessmentSession::new(AssessmentMode::Quick, Demographics::default());
    assert!(matches!(
        render_report(&session, Locale::En),
        Err(ExportError::NotScored(id)) if id == session.id
    ));
}

#[test]
fn custom_template() {
    let out = render_template(
        "summary",
        "{{ level_key }}:{{ total }}{% for d in dimensions %}|{{ d.key }}={{ d.score }}{% endfor %}",
        &scored(AssessmentMode::Quick),
        Locale::En,
    )
    .unwrap();
    assert_eq!(out, "moderate:47|sos=52|guilt=41|shame=50|inhibition=46");
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_template("bad", "{% for %}", &scored(AssessmentMode::Quick), Locale::En).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
