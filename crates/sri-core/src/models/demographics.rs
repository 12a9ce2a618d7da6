use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Self-reported age bracket. `Minor` removes clinically inappropriate
/// scales from the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum AgeBracket {
    Minor,
    YoungAdult,
    Adult,
    MiddleAged,
    Senior,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Other,
    PreferNotToSay,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum RelationshipStatus {
    Single,
    Dating,
    Partnered,
    Married,
    Divorced,
    Widowed,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl RelationshipStatus {
    /// Whether the respondent currently has a partner. Unspecified counts
    /// as partnered so partner-related scales stay in the selection.
    pub fn has_partner(self) -> bool {
        matches!(
            self,
            Self::Dating | Self::Partnered | Self::Married | Self::Unspecified
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SexualActivity {
    Active,
    Inactive,
    Never,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Respondent attributes collected before the questionnaire starts.
///
/// Immutable once an assessment begins; only scale selection reads it.
/// Every field tolerates absence: missing or unrecognized values become
/// `Unspecified`, which the selector treats as the most inclusive choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Demographics {
    #[serde(default)]
    pub age: AgeBracket,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub relationship_status: RelationshipStatus,
    #[serde(default)]
    pub sexual_activity: SexualActivity,
    #[serde(default)]
    pub consent: bool,
}

impl Demographics {
    pub fn is_minor(&self) -> bool {
        self.age == AgeBracket::Minor
    }

    /// Parse demographics from an arbitrary JSON value, field by field.
    ///
    /// Never fails: a non-object value or a field of the wrong shape falls
    /// back to its default and is logged.
    pub fn from_json_lenient(value: &serde_json::Value) -> Self {
        let Some(obj) = value.as_object() else {
            tracing::warn!("demographics is not a JSON object, using defaults");
            return Self::default();
        };

        Self {
            age: lenient_field(obj, "age"),
            gender: lenient_field(obj, "gender"),
            relationship_status: lenient_field(obj, "relationshipStatus"),
            sexual_activity: lenient_field(obj, "sexualActivity"),
            consent: lenient_field(obj, "consent"),
        }
    }
}

fn lenient_field<T: DeserializeOwned + Default>(
    obj: &serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> T {
    match obj.get(key) {
        None | Some(serde_json::Value::Null) => T::default(),
        Some(raw) => serde_json::from_value(raw.clone()).unwrap_or_else(|e| {
            tracing::warn!(field = key, error = %e, "invalid demographics field, using default");
            T::default()
        }),
    }
}
