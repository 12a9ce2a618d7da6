use jiff::Timestamp;
use sri_assessment::assessment::Assessment;
use sri_assessment::error::AssessmentError;
use sri_cli::input::{AnswerFile, InputError};
use sri_cli::workspace::DataDir;
use sri_core::config::{ProgressConfig, SriConfig, save_config};
use sri_core::models::demographics::{AgeBracket, Gender, SexualActivity};
use sri_core::models::session::AssessmentMode;

fn t0() -> Timestamp {
    Timestamp::from_second(1_750_000_000).unwrap()
}

#[test]
fn parses_export_style_responses() {
    let file = AnswerFile::parse(
        r#"{
            "type": "quick",
            "demographics": {"age": "adult", "gender": "female", "sexualActivity": "never"},
            "responses": {"sos_01": 3, "kiss9_02": 1}
        }"#,
    )
    .unwrap();

    assert_eq!(file.mode, AssessmentMode::Quick);
    assert_eq!(file.demographics.age, AgeBracket::Adult);
    assert_eq!(file.demographics.gender, Gender::Female);
    assert_eq!(file.demographics.sexual_activity, SexualActivity::Never);
    assert_eq!(
        file.responses,
        [("kiss9_02".to_string(), 1), ("sos_01".to_string(), 3)]
    );
    assert_eq!(file.current_page, None);
}

#[test]
fn parses_stored_style_responses() {
    let file = AnswerFile::parse(
        r#"{
            "type": "full",
            "responses": [
                {"questionId": "sos_02", "value": 5, "timestamp": "2025-06-15T15:06:40Z"},
                {"questionId": "sos_01", "value": 2}
            ],
            "currentPage": 1
        }"#,
    )
    .unwrap();
    assert_eq!(file.mode, AssessmentMode::Full);
    assert_eq!(file.responses[0], ("sos_02".to_string(), 5));
    assert_eq!(file.current_page, Some(1));
}

#[test]
fn bad_demographics_fall_back_to_defaults() {
    let file = AnswerFile::parse(r#"{"type": "quick", "demographics": {"age": 42}}"#).unwrap();
    assert_eq!(file.demographics.age, AgeBracket::Unspecified);
    assert!(file.responses.is_empty());
}

#[test]
fn type_is_required() {
    assert!(matches!(
        AnswerFile::parse(r#"{"responses": {}}"#),
        Err(InputError::MissingField("type"))
    ));
    assert!(matches!(
        AnswerFile::parse(r#"{"type": "medium"}"#),
        Err(InputError::InvalidField { field: "type", .. })
    ));
    assert!(matches!(AnswerFile::parse("nope"), Err(InputError::Json(_))));
}

#[test]
fn apply_records_answers() {
    let file = AnswerFile::parse(r#"{"type": "quick", "responses": {"sos_01": 3, "sos_02": 6}}"#)
        .unwrap();
    let mut assessment = Assessment::begin_at(file.mode, file.demographics, &ProgressConfig::default(), t0());
    file.apply(&mut assessment, t0()).unwrap();
    assert_eq!(assessment.stats().answered, 2);
}

#[test]
fn apply_rejects_foreign_questions() {
    let file = AnswerFile::parse(r#"{"type": "quick", "responses": {"not_a_question": 1}}"#).unwrap();
    let mut assessment = Assessment::begin_at(file.mode, file.demographics, &ProgressConfig::default(), t0());
    assert!(matches!(
        file.apply(&mut assessment, t0()),
        Err(AssessmentError::UnknownQuestion(_))
    ));
}

#[test]
fn config_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let data = DataDir::new(dir.path());
    assert_eq!(data.load_config(None).unwrap(), SriConfig::default());

    let mut custom = SriConfig::default();
    custom.progress.page_size = 10;
    save_config(&data.config_path(), &custom).unwrap();
    assert_eq!(data.load_config(None).unwrap().progress.page_size, 10);

    let missing = dir.path().join("missing.json");
    assert!(data.load_config(Some(&missing)).is_err());
}
