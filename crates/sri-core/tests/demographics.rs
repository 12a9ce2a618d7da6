use serde_json::json;
use sri_core::models::demographics::{
    AgeBracket, Demographics, Gender, RelationshipStatus, SexualActivity,
};

#[test]
fn parses_kebab_case_values() {
    let demo: Demographics = serde_json::from_value(json!({
        "age": "young-adult",
        "gender": "non-binary",
        "relationshipStatus": "married",
        "sexualActivity": "inactive",
        "consent": true
    }))
    .unwrap();

    assert_eq!(demo.age, AgeBracket::YoungAdult);
    assert_eq!(demo.gender, Gender::NonBinary);
    assert_eq!(demo.relationship_status, RelationshipStatus::Married);
    assert_eq!(demo.sexual_activity, SexualActivity::Inactive);
    assert!(demo.consent);
}

#[test]
fn unknown_and_missing_values_become_unspecified() {
    let demo: Demographics = serde_json::from_value(json!({ "age": "centenarian" })).unwrap();
    assert_eq!(demo.age, AgeBracket::Unspecified);
    assert_eq!(demo.sexual_activity, SexualActivity::Unspecified);
    assert!(!demo.consent);
}

#[test]
fn lenient_parse_survives_wrong_shapes() {
    let demo = Demographics::from_json_lenient(&json!({
        "age": 42,
        "gender": "female",
        "consent": "yes"
    }));
    assert_eq!(demo.age, AgeBracket::Unspecified);
    assert_eq!(demo.gender, Gender::Female);
    assert!(!demo.consent);

    assert_eq!(
        Demographics::from_json_lenient(&json!(["not", "an", "object"])),
        Demographics::default()
    );
}

#[test]
fn unspecified_relationship_counts_as_partnered() {
    assert!(RelationshipStatus::Unspecified.has_partner());
    assert!(RelationshipStatus::Dating.has_partner());
    assert!(!RelationshipStatus::Single.has_partner());
}
