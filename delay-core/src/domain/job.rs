//! Job domain types

use serde::{Deserialize, Serialize};

/// Opaque identifier of a submitted prediction request
///
/// Issued by the service when a query is accepted and used as the polling
/// key until a terminal response arrives. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

impl JobId {
    /// Wraps a raw id, returning `None` for an empty string
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for JobId {
    type Error = &'static str;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw).ok_or("job id cannot be empty")
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_empty() {
        assert!(JobId::parse("").is_none());
    }

    #[test]
    fn test_parse_keeps_raw_value() {
        let id = JobId::parse("6a1b-42").unwrap();
        assert_eq!(id.as_str(), "6a1b-42");
        assert_eq!(id.to_string(), "6a1b-42");
    }

    #[test]
    fn test_deserialize_goes_through_parse() {
        let id: JobId = serde_json::from_str("\"6a1b-42\"").unwrap();
        assert_eq!(id.as_str(), "6a1b-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"6a1b-42\"");

        let err = serde_json::from_str::<JobId>("\"\"").unwrap_err();
        assert!(err.to_string().contains("job id cannot be empty"));
    }
}
