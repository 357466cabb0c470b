mod bank;
mod difficulty;
mod ids;
mod question;
mod settings;
mod summary;

pub use bank::{BankError, GameKind, ParseGameKindError, QuestionBank};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use ids::QuestionId;
pub use question::{Question, QuestionDraft, QuestionError, QuestionKind};
pub use settings::{DEFAULT_QUESTIONS_PER_SESSION, MatchMode, QuizSettings, SettingsError};
pub use summary::{SessionSummary, SummaryError};
