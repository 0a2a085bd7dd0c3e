use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::buckets::{AgeBand, Band, IncomeBand, InvalidValue};

/// Spelling of the wildcard predicate in persisted catalog data.
pub(crate) const WILDCARD: &str = "Any";

/// Identifier for a catalog scheme record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemeId(pub u32);

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog record describing a benefit program and its eligibility predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: SchemeId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub benefits: String,
    pub apply_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub eligibility: EligibilityRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<NaiveDate>,
}

/// Per-field predicates a profile must satisfy. A field missing from the
/// persisted record defaults to wildcard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityRule {
    pub occupation: ValuePredicate,
    pub gender: ValuePredicate,
    pub caste: ValuePredicate,
    pub age: BandPredicate<AgeBand>,
    pub income: BandPredicate<IncomeBand>,
}

/// Wildcard-or-set predicate over a string-valued profile attribute.
///
/// Catalog records declare these as `"Any"`, a single string, or an array
/// of strings; an array containing `"Any"` collapses to wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValuePredicate {
    #[default]
    Any,
    OneOf(Vec<String>),
}

impl Serialize for ValuePredicate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ValuePredicate::Any => serializer.serialize_str(WILDCARD),
            ValuePredicate::OneOf(values) => values.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ValuePredicate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PredicateVisitor;

        impl<'de> Visitor<'de> for PredicateVisitor {
            type Value = ValuePredicate;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("\"Any\", a string, or a non-empty array of strings")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value == WILDCARD {
                    Ok(ValuePredicate::Any)
                } else {
                    Ok(ValuePredicate::OneOf(vec![value.to_string()]))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = Vec::new();
                while let Some(value) = seq.next_element::<String>()? {
                    values.push(value);
                }
                if values.is_empty() {
                    return Err(de::Error::custom("eligibility set must not be empty"));
                }
                if values.iter().any(|value| value == WILDCARD) {
                    Ok(ValuePredicate::Any)
                } else {
                    Ok(ValuePredicate::OneOf(values))
                }
            }
        }

        deserializer.deserialize_any(PredicateVisitor)
    }
}

/// Wildcard-or-band predicate over a bucketed numeric profile attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPredicate<B> {
    Any,
    Band(B),
}

impl<B> Default for BandPredicate<B> {
    fn default() -> Self {
        BandPredicate::Any
    }
}

impl<B: Band> Serialize for BandPredicate<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BandPredicate::Any => serializer.serialize_str(WILDCARD),
            BandPredicate::Band(band) => serializer.serialize_str(band.label()),
        }
    }
}

impl<'de, B: Band> Deserialize<'de> for BandPredicate<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        if label == WILDCARD {
            return Ok(BandPredicate::Any);
        }
        B::from_label(&label)
            .map(BandPredicate::Band)
            .ok_or_else(|| de::Error::custom(format!("unknown band label '{label}'")))
    }
}

/// Numeric profile field as submitted by the intake form.
///
/// The form serializes text inputs, so a persisted value may arrive as a
/// JSON integer or a numeric string. Anything else is retained as an
/// explicit invalid marker rather than failing the whole profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericField {
    Value(u64),
    Invalid(String),
}

impl NumericField {
    pub fn value(&self) -> Result<u64, InvalidValue> {
        match self {
            NumericField::Value(value) => Ok(*value),
            NumericField::Invalid(_) => Err(InvalidValue),
        }
    }
}

impl From<u64> for NumericField {
    fn from(value: u64) -> Self {
        NumericField::Value(value)
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::Value(value) => write!(f, "{value}"),
            NumericField::Invalid(raw) => write!(f, "{raw}"),
        }
    }
}

impl Serialize for NumericField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            NumericField::Value(value) => serializer.serialize_u64(*value),
            NumericField::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for NumericField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumericVisitor;

        impl<'de> Visitor<'de> for NumericVisitor {
            type Value = NumericField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an integer or a numeric string")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(NumericField::Value(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(value)
                    .map(NumericField::Value)
                    .or_else(|_| Ok(NumericField::Invalid(value.to_string())))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
                    Ok(NumericField::Value(value as u64))
                } else {
                    Ok(NumericField::Invalid(value.to_string()))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match value.trim().parse::<u64>() {
                    Ok(parsed) => Ok(NumericField::Value(parsed)),
                    Err(_) => Ok(NumericField::Invalid(value.to_string())),
                }
            }
        }

        deserializer.deserialize_any(NumericVisitor)
    }
}

/// The single active set of applicant attributes, replaced wholesale on
/// each intake submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub full_name: String,
    pub age: NumericField,
    pub gender: String,
    pub occupation: String,
    pub annual_income: NumericField,
    pub caste: String,
    pub marital_status: String,
    pub education: String,
    pub disability: String,
    pub state: String,
}

/// Opaque identity pair supplied by the surrounding application. The core
/// performs no authentication; it only gates saved-list access on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Option<String>,
    pub is_signed_in: bool,
}

impl Identity {
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            is_signed_in: true,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}
