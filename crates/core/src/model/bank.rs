use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question id {id} appears more than once in the bank")]
    DuplicateId { id: QuestionId },
}

/// The quiz games a bank can feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    FillInBlanks,
    GuessOutput,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::FillInBlanks, GameKind::GuessOutput];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GameKind::FillInBlanks => "fill-in-blanks",
            GameKind::GuessOutput => "guess-output",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameKind::FillInBlanks => "Fill in the Blanks",
            GameKind::GuessOutput => "Guess the Output",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a game kind from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGameKindError {
    raw: String,
}

impl fmt::Display for ParseGameKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown game: {}", self.raw)
    }
}

impl std::error::Error for ParseGameKindError {}

impl FromStr for GameKind {
    type Err = ParseGameKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseGameKindError { raw: s.to_string() })
    }
}

/// Read-only collection of questions for one game.
///
/// Cloning is cheap: the questions live behind an `Arc` and are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    kind: GameKind,
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// Build a bank from validated questions, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `BankError::DuplicateId` if two questions share an id.
    pub fn new(kind: GameKind, questions: Vec<Question>) -> Result<Self, BankError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(BankError::DuplicateId {
                    id: question.id().clone(),
                });
            }
        }

        Ok(Self {
            kind,
            questions: questions.into(),
        })
    }

    #[must_use]
    pub fn empty(kind: GameKind) -> Self {
        Self {
            kind,
            questions: Arc::from(Vec::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        self.kind
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }
}
