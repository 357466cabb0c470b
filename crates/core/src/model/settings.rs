use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of questions drawn per play-through unless configured otherwise.
pub const DEFAULT_QUESTIONS_PER_SESSION: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("questions per session must be > 0")]
    InvalidQuestionsPerSession,
}

/// How a submitted answer is compared with the correct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Exact, case-sensitive comparison of the raw input.
    #[default]
    Strict,
    /// Leading and trailing whitespace is ignored on both sides.
    TrimWhitespace,
}

/// Configuration for quiz sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    questions_per_session: u32,
    matching: MatchMode,
}

impl QuizSettings {
    /// Creates custom quiz settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidQuestionsPerSession` if the count is zero.
    pub fn new(questions_per_session: u32, matching: MatchMode) -> Result<Self, SettingsError> {
        if questions_per_session == 0 {
            return Err(SettingsError::InvalidQuestionsPerSession);
        }
        Ok(Self {
            questions_per_session,
            matching,
        })
    }

    #[must_use]
    pub fn questions_per_session(&self) -> u32 {
        self.questions_per_session
    }

    #[must_use]
    pub fn session_size(&self) -> usize {
        usize::try_from(self.questions_per_session).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn matching(&self) -> MatchMode {
        self.matching
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            questions_per_session: DEFAULT_QUESTIONS_PER_SESSION,
            matching: MatchMode::Strict,
        }
    }
}
