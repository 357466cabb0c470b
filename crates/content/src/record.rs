use devpath_core::model::{Difficulty, GameKind, QuestionBank, QuestionDraft, QuestionKind};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// On-disk shape of a bank file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankFile {
    pub kind: GameKind,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

/// Serialized shape of one question.
///
/// Kept separate from the domain `Question` so the file format can evolve
/// without leaking serde concerns into the core crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    #[serde(flatten)]
    pub body: QuestionBody,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionBody {
    MultipleChoice {
        code: String,
        options: Vec<String>,
        #[serde(rename = "correctAnswer")]
        correct_answer: String,
    },
    FillInBlank {
        #[serde(default)]
        before: String,
        #[serde(default)]
        after: String,
        #[serde(rename = "correctAnswer")]
        correct_answer: String,
    },
}

impl QuestionRecord {
    #[must_use]
    pub fn into_draft(self) -> QuestionDraft {
        let kind = match self.body {
            QuestionBody::MultipleChoice {
                code,
                options,
                correct_answer,
            } => QuestionKind::MultipleChoice {
                code,
                options,
                correct_answer,
            },
            QuestionBody::FillInBlank {
                before,
                after,
                correct_answer,
            } => QuestionKind::FillInBlank {
                before,
                after,
                correct_answer,
            },
        };

        QuestionDraft {
            id: self.id,
            kind,
            explanation: self.explanation,
            difficulty: self.difficulty,
            language: self.language,
        }
    }
}

impl BankFile {
    /// Decode a bank from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` if the JSON does not match the bank shape.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate every record and assemble the bank.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Question` for the first invalid record, or
    /// `ContentError::Bank` if ids collide.
    pub fn into_bank(self) -> Result<QuestionBank, ContentError> {
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let id = record.id.clone();
                record
                    .into_draft()
                    .validate()
                    .map_err(|source| ContentError::Question { index, id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuestionBank::new(self.kind, questions)?)
    }
}
