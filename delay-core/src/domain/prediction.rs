//! Prediction domain types
//!
//! The classifier buckets arrival delay into three categories. The service
//! reports the bucket as a bare number; [`DelayCategory`] gives it a name
//! and the fixed text shown to the user.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Result record attached to a terminal poll response
///
/// Wire shape: `{"Prediction": 1}`. The classifier emits doubles, so an
/// integral float such as `1.0` is accepted as well. The code is kept as-is
/// even when it is outside the known categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "Prediction", deserialize_with = "deserialize_code")]
    pub code: i64,
}

impl Prediction {
    pub fn new(code: i64) -> Self {
        Self { code }
    }

    /// The named category, or `None` for an unrecognized code
    pub fn category(&self) -> Option<DelayCategory> {
        DelayCategory::from_code(self.code)
    }
}

/// Arrival delay bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayCategory {
    /// 0-15 minutes late
    OnTime,
    /// 15-60 minutes late
    SlightlyLate,
    /// 60+ minutes late
    VeryLate,
}

impl DelayCategory {
    pub const ALL: [DelayCategory; 3] = [
        DelayCategory::OnTime,
        DelayCategory::SlightlyLate,
        DelayCategory::VeryLate,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(DelayCategory::OnTime),
            1 => Some(DelayCategory::SlightlyLate),
            2 => Some(DelayCategory::VeryLate),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            DelayCategory::OnTime => 0,
            DelayCategory::SlightlyLate => 1,
            DelayCategory::VeryLate => 2,
        }
    }

    /// Display text for the category
    pub fn message(&self) -> &'static str {
        match self {
            DelayCategory::OnTime => "On Time (0-15 Minutes Late)",
            DelayCategory::SlightlyLate => "Slightly Late (15-60 Minute Delay)",
            DelayCategory::VeryLate => "Very Late (60+ Minute Delay)",
        }
    }
}

impl std::fmt::Display for DelayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(code) = number.as_i64() {
        return Ok(code);
    }

    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => Ok(value as i64),
        _ => Err(de::Error::custom(format!(
            "prediction code {} is not an integer",
            number
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_messages() {
        assert_eq!(
            DelayCategory::from_code(0).unwrap().message(),
            "On Time (0-15 Minutes Late)"
        );
        assert_eq!(
            DelayCategory::from_code(1).unwrap().message(),
            "Slightly Late (15-60 Minute Delay)"
        );
        assert_eq!(
            DelayCategory::from_code(2).unwrap().message(),
            "Very Late (60+ Minute Delay)"
        );
    }

    #[test]
    fn test_unknown_codes_have_no_category() {
        for code in [-1, 3, 42, i64::MAX] {
            assert_eq!(DelayCategory::from_code(code), None);
        }
    }

    #[test]
    fn test_code_matches_from_code() {
        for category in DelayCategory::ALL {
            assert_eq!(DelayCategory::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn test_deserialize_integer_and_integral_float() {
        let p: Prediction = serde_json::from_str(r#"{"Prediction": 2}"#).unwrap();
        assert_eq!(p.code, 2);

        let p: Prediction = serde_json::from_str(r#"{"Prediction": 1.0}"#).unwrap();
        assert_eq!(p.category(), Some(DelayCategory::SlightlyLate));
    }

    #[test]
    fn test_deserialize_rejects_fractional_code() {
        let result = serde_json::from_str::<Prediction>(r#"{"Prediction": 1.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_codes_beyond_i64() {
        for raw in [
            r#"{"Prediction": 9223372036854775808.0}"#,
            r#"{"Prediction": 9223372036854775808}"#,
            r#"{"Prediction": 1e300}"#,
        ] {
            assert!(serde_json::from_str::<Prediction>(raw).is_err(), "{}", raw);
        }
    }

    #[test]
    fn test_deserialize_rejects_string_code() {
        let result = serde_json::from_str::<Prediction>(r#"{"Prediction": "1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_code_is_preserved() {
        let p: Prediction = serde_json::from_str(r#"{"Prediction": 7}"#).unwrap();
        assert_eq!(p.code, 7);
        assert_eq!(p.category(), None);
    }
}
