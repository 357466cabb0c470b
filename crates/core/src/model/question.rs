use std::collections::HashSet;

use thiserror::Error;

use crate::model::difficulty::Difficulty;
use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("correct answer cannot be empty")]
    EmptyAnswer,

    #[error("multiple-choice questions need at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("option {option:?} appears more than once")]
    DuplicateOption { option: String },

    #[error("correct answer {answer:?} is not one of the options")]
    AnswerNotAnOption { answer: String },
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// What the learner sees and how the answer is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Guess-the-output: a snippet plus a fixed list of candidate outputs.
    MultipleChoice {
        code: String,
        options: Vec<String>,
        correct_answer: String,
    },
    /// Fill-in-the-blank: the snippet is split around a single blank.
    FillInBlank {
        before: String,
        after: String,
        correct_answer: String,
    },
}

impl QuestionKind {
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        match self {
            QuestionKind::MultipleChoice { correct_answer, .. }
            | QuestionKind::FillInBlank { correct_answer, .. } => correct_answer,
        }
    }
}

/// Unvalidated question input, as read from a bank file or built in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: String,
    pub kind: QuestionKind,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub language: Option<String>,
}

impl QuestionDraft {
    #[must_use]
    pub fn multiple_choice(
        id: impl Into<String>,
        code: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::MultipleChoice {
                code: code.into(),
                options,
                correct_answer: correct_answer.into(),
            },
            explanation: String::new(),
            difficulty: Difficulty::default(),
            language: None,
        }
    }

    #[must_use]
    pub fn fill_in_blank(
        id: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::FillInBlank {
                before: before.into(),
                after: after.into(),
                correct_answer: correct_answer.into(),
            },
            explanation: String::new(),
            difficulty: Difficulty::default(),
            language: None,
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the id is blank, a fill-in answer is empty,
    /// or a multiple-choice answer is not exactly one of its distinct options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = QuestionId::new(self.id)?;

        match &self.kind {
            QuestionKind::MultipleChoice {
                options,
                correct_answer,
                ..
            } => {
                if options.len() < 2 {
                    return Err(QuestionError::TooFewOptions {
                        count: options.len(),
                    });
                }
                let mut seen = HashSet::with_capacity(options.len());
                for option in options {
                    if !seen.insert(option.as_str()) {
                        return Err(QuestionError::DuplicateOption {
                            option: option.clone(),
                        });
                    }
                }
                if !seen.contains(correct_answer.as_str()) {
                    return Err(QuestionError::AnswerNotAnOption {
                        answer: correct_answer.clone(),
                    });
                }
            }
            QuestionKind::FillInBlank { correct_answer, .. } => {
                if correct_answer.is_empty() {
                    return Err(QuestionError::EmptyAnswer);
                }
            }
        }

        let language = self
            .language
            .map(|lang| lang.trim().to_lowercase())
            .filter(|lang| !lang.is_empty());

        Ok(Question {
            id,
            kind: self.kind,
            explanation: self.explanation,
            difficulty: self.difficulty,
            language,
        })
    }
}

/// A validated, immutable quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    kind: QuestionKind,
    explanation: String,
    difficulty: Difficulty,
    language: Option<String>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        self.kind.correct_answer()
    }

    /// Candidate answers; empty for fill-in-the-blank questions.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            QuestionKind::FillInBlank { .. } => &[],
        }
    }

    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
