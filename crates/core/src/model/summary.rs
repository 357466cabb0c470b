use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::bank::GameKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({correct}) exceeds number of questions ({total})")]
    ScoreExceedsTotal { correct: u32, total: u32 },
}

/// Aggregate result of a completed quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    kind: GameKind,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total: u32,
    correct: u32,
}

impl SessionSummary {
    /// Build a summary for a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SummaryError::ScoreExceedsTotal` if `correct > total`.
    pub fn new(
        kind: GameKind,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total: u32,
        correct: u32,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if correct > total {
            return Err(SummaryError::ScoreExceedsTotal { correct, total });
        }

        Ok(Self {
            kind,
            started_at,
            completed_at,
            total,
            correct,
        })
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        self.kind
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.total - self.correct
    }

    /// Share of correct answers, rounded down. Zero for an empty session.
    #[must_use]
    pub fn accuracy_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = u64::from(self.correct) * 100 / u64::from(self.total);
        u8::try_from(percent).unwrap_or(100)
    }
}
