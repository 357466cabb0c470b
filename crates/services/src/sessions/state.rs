use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info};

use devpath_core::Clock;
use devpath_core::model::{GameKind, QuestionId, SessionSummary};

use super::matcher::{AnswerMatcher, QuizItem};
use super::progress::SessionProgress;
use super::view::SessionSnapshot;
use crate::error::SessionError;

//
// ─── STATES & FEEDBACK ─────────────────────────────────────────────────────────
//

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for an answer to the current question.
    InProgress,
    /// The current question was answered; waiting for `advance`.
    AnswerShown,
    /// Every question has been answered and advanced past.
    Completed,
}

/// Per-question answer signal, cleared whenever the session advances.
///
/// The submitted text is kept so a presentation layer can highlight both the
/// picked option and the correct one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Unanswered,
    Correct { submitted: String },
    Incorrect { submitted: String },
}

impl Feedback {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        !matches!(self, Feedback::Unanswered)
    }

    /// `Some(true)` when answered correctly, `None` before any answer.
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        match self {
            Feedback::Unanswered => None,
            Feedback::Correct { .. } => Some(true),
            Feedback::Incorrect { .. } => Some(false),
        }
    }

    #[must_use]
    pub fn submitted(&self) -> Option<&str> {
        match self {
            Feedback::Unanswered => None,
            Feedback::Correct { submitted } | Feedback::Incorrect { submitted } => {
                Some(submitted.as_str())
            }
        }
    }
}

/// Why a transition request left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// `answer` while the current question already has feedback.
    AlreadyAnswered,
    /// `advance` before the current question was answered.
    NotAnswered,
    /// Any transition after the last question.
    Completed,
}

/// Result of a transition request.
///
/// Invalid requests are not errors: the presentation layer is expected to
/// disable the triggering controls, and a stray request must simply not
/// corrupt the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// One scored answer in the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: QuestionId,
    pub submitted: String,
    pub correct: bool,
    pub answered_at: DateTime<Utc>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory play-through over an already sampled list of questions.
///
/// Steps through the questions in order; each question is answered once and
/// then advanced past. A session over zero questions starts out completed.
pub struct QuizSession<Q, M> {
    questions: Vec<Q>,
    matcher: M,
    clock: Clock,
    current: usize,
    score: u32,
    feedback: Feedback,
    history: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl<Q, M> QuizSession<Q, M>
where
    Q: QuizItem,
    M: AnswerMatcher<Q>,
{
    #[must_use]
    pub fn new(questions: Vec<Q>, matcher: M, clock: Clock) -> Self {
        let started_at = clock.now();
        let completed_at = questions.is_empty().then_some(started_at);
        Self {
            questions,
            matcher,
            clock,
            current: 0,
            score: 0,
            feedback: Feedback::Unanswered,
            history: Vec::new(),
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.current >= self.questions.len() {
            SessionState::Completed
        } else if self.feedback.is_answered() {
            SessionState::AnswerShown
        } else {
            SessionState::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Completed
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Q> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[Q] {
        &self.questions
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.history.len(),
            remaining: self.questions.len().saturating_sub(self.current),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Score the submission against the current question.
    ///
    /// Ignored once the current question has feedback or the session is complete,
    /// so a question can never be scored twice.
    pub fn answer(&mut self, submitted: &str) -> Transition {
        let question = match self.state() {
            SessionState::Completed => return self.ignore("answer", IgnoreReason::Completed),
            SessionState::AnswerShown => {
                return self.ignore("answer", IgnoreReason::AlreadyAnswered);
            }
            SessionState::InProgress => &self.questions[self.current],
        };

        let correct = self.matcher.matches(question, submitted);
        let question_id = question.id().clone();
        if correct {
            self.score = self.score.saturating_add(1);
            self.feedback = Feedback::Correct {
                submitted: submitted.to_owned(),
            };
        } else {
            self.feedback = Feedback::Incorrect {
                submitted: submitted.to_owned(),
            };
        }

        debug!(
            question = %question_id,
            index = self.current,
            correct,
            score = self.score,
            "answer recorded"
        );
        self.history.push(AnswerRecord {
            question_id,
            submitted: submitted.to_owned(),
            correct,
            answered_at: self.clock.now(),
        });
        Transition::Applied
    }

    /// Move past an answered question, completing the session after the last one.
    pub fn advance(&mut self) -> Transition {
        match self.state() {
            SessionState::Completed => return self.ignore("advance", IgnoreReason::Completed),
            SessionState::InProgress => return self.ignore("advance", IgnoreReason::NotAnswered),
            SessionState::AnswerShown => {}
        }

        self.feedback = Feedback::Unanswered;
        self.current += 1;
        if self.current == self.questions.len() {
            let now = self.clock.now();
            self.completed_at = Some(now);
            info!(
                score = self.score,
                total = self.questions.len(),
                "quiz session completed"
            );
        }
        Transition::Applied
    }

    /// Immutable view of the session as it stands.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot<Q>
    where
        Q: Clone,
    {
        SessionSnapshot {
            current_question: self.current_question().cloned(),
            current_index: self.current,
            total_questions: self.questions.len(),
            score: self.score,
            feedback: self.feedback.clone(),
            state: self.state(),
        }
    }

    /// Build the summary of a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotCompleted` before the last question is advanced past.
    pub fn summary(&self, kind: GameKind) -> Result<SessionSummary, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::NotCompleted)?;
        // Session size is bounded by a `u32` setting.
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        Ok(SessionSummary::new(
            kind,
            self.started_at,
            completed_at,
            total,
            self.score,
        )?)
    }

    fn ignore(&self, op: &'static str, reason: IgnoreReason) -> Transition {
        debug!(op, ?reason, index = self.current, "transition ignored");
        Transition::Ignored(reason)
    }
}

impl<Q, M> fmt::Debug for QuizSession<Q, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("feedback", &self.feedback)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
