use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::question::QuestionError;

/// Unique identifier for a Question within its bank.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a new `QuestionId`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyId` if the id is empty or whitespace only.
    pub fn new(id: impl Into<String>) -> Result<Self, QuestionError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(QuestionError::EmptyId);
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({:?})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QuestionId {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for QuestionId {
    type Error = QuestionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_display() {
        let id = QuestionId::new("java-loop-1").unwrap();
        assert_eq!(id.to_string(), "java-loop-1");
    }

    #[test]
    fn question_id_rejects_blank() {
        assert!(matches!(QuestionId::new("   "), Err(QuestionError::EmptyId)));
        assert!("".parse::<QuestionId>().is_err());
    }

    #[test]
    fn question_id_debug_is_quoted() {
        let id: QuestionId = "py-1".parse().unwrap();
        assert_eq!(format!("{id:?}"), "QuestionId(\"py-1\")");
    }

    #[test]
    fn question_id_deserialize_rejects_empty() {
        let ok: QuestionId = serde_json::from_str("\"q1\"").unwrap();
        assert_eq!(ok.as_str(), "q1");
        assert!(serde_json::from_str::<QuestionId>("\"\"").is_err());
    }
}
