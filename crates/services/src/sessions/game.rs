use std::fmt;
use tracing::{debug, info};

use devpath_core::Clock;
use devpath_core::model::{GameKind, Question, QuestionBank, QuizSettings, SessionSummary};

use super::matcher::{AnswerMatcher, matcher_for};
use super::sampler::SessionSampler;
use super::state::{QuizSession, Transition};
use super::view::{SessionObserver, SessionSnapshot};
use crate::error::SessionError;

type DynSession = QuizSession<Question, Box<dyn AnswerMatcher<Question>>>;

/// One quiz game: a bank, the session currently being played, and the
/// observers that render it.
///
/// `restart` draws a fresh session from the same bank; the bank itself is
/// never modified.
pub struct QuizGame {
    bank: QuestionBank,
    settings: QuizSettings,
    sampler: SessionSampler,
    clock: Clock,
    session: DynSession,
    observers: Vec<Box<dyn SessionObserver>>,
    plays: u32,
}

impl QuizGame {
    /// Start a game by drawing its first session.
    #[must_use]
    pub fn new(
        bank: QuestionBank,
        settings: QuizSettings,
        mut sampler: SessionSampler,
        clock: Clock,
    ) -> Self {
        let session = Self::draw_session(&bank, &settings, &mut sampler, clock);
        info!(
            kind = %bank.kind(),
            questions = session.total_questions(),
            "quiz session started"
        );
        Self {
            bank,
            settings,
            sampler,
            clock,
            session,
            observers: Vec::new(),
            plays: 1,
        }
    }

    fn draw_session(
        bank: &QuestionBank,
        settings: &QuizSettings,
        sampler: &mut SessionSampler,
        clock: Clock,
    ) -> DynSession {
        let plan = sampler.draw(bank.questions(), settings.session_size());
        if plan.is_short() {
            debug!(
                kind = %bank.kind(),
                bank_size = plan.bank_size,
                requested = plan.requested,
                "bank smaller than session size, using every question"
            );
        }
        QuizSession::new(plan.questions, matcher_for(settings.matching()), clock)
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        self.bank.kind()
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn session(&self) -> &DynSession {
        &self.session
    }

    /// Number of sessions drawn so far, including the current one.
    #[must_use]
    pub fn plays(&self) -> u32 {
        self.plays
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Register an observer. It is handed the current snapshot right away,
    /// then one snapshot per applied transition.
    pub fn subscribe(&mut self, mut observer: impl SessionObserver + 'static) {
        observer.on_snapshot(&self.session.snapshot());
        self.observers.push(Box::new(observer));
    }

    pub fn answer(&mut self, value: &str) -> Transition {
        let transition = self.session.answer(value);
        self.notify(transition);
        transition
    }

    pub fn advance(&mut self) -> Transition {
        let transition = self.session.advance();
        self.notify(transition);
        transition
    }

    /// Replace the session with a newly sampled one. Valid from any state.
    pub fn restart(&mut self) -> Transition {
        self.session = Self::draw_session(
            &self.bank,
            &self.settings,
            &mut self.sampler,
            self.clock,
        );
        self.plays = self.plays.saturating_add(1);
        info!(
            kind = %self.bank.kind(),
            questions = self.session.total_questions(),
            plays = self.plays,
            "quiz session restarted"
        );
        self.notify(Transition::Applied);
        Transition::Applied
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotCompleted` while the session is still running.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        self.session.summary(self.bank.kind())
    }

    fn notify(&mut self, transition: Transition) {
        if !transition.is_applied() || self.observers.is_empty() {
            return;
        }
        let snapshot = self.session.snapshot();
        for observer in &mut self.observers {
            observer.on_snapshot(&snapshot);
        }
    }
}

impl fmt::Debug for QuizGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizGame")
            .field("kind", &self.bank.kind())
            .field("bank_len", &self.bank.len())
            .field("settings", &self.settings)
            .field("session", &self.session)
            .field("observers", &self.observers.len())
            .field("plays", &self.plays)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::SessionState;
    use devpath_core::model::{MatchMode, QuestionDraft};
    use devpath_core::time::fixed_clock;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bank(n: usize) -> QuestionBank {
        let questions = (0..n)
            .map(|i| {
                QuestionDraft::fill_in_blank(format!("q{i}"), "", "", format!("a{i}"))
                    .validate()
                    .unwrap()
            })
            .collect();
        QuestionBank::new(GameKind::FillInBlanks, questions).unwrap()
    }

    fn game(n: usize, settings: QuizSettings) -> QuizGame {
        QuizGame::new(bank(n), settings, SessionSampler::seeded(11), fixed_clock())
    }

    fn answer_correctly(game: &mut QuizGame) {
        let answer = game
            .snapshot()
            .current_question
            .map(|q| q.correct_answer().to_owned())
            .unwrap();
        game.answer(&answer);
    }

    #[test]
    fn session_size_is_capped_by_settings() {
        let g = game(25, QuizSettings::default());
        assert_eq!(g.snapshot().total_questions, 10);
    }

    #[test]
    fn observers_see_applied_transitions_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut g = game(3, QuizSettings::default());
        let sink = Rc::clone(&seen);
        g.subscribe(move |snap: &SessionSnapshot| sink.borrow_mut().push(snap.clone()));
        assert_eq!(seen.borrow().len(), 1);

        g.advance();
        assert_eq!(seen.borrow().len(), 1);

        answer_correctly(&mut g);
        g.answer("again");
        assert_eq!(seen.borrow().len(), 2);

        g.advance();
        assert_eq!(seen.borrow().len(), 3);

        assert!(g.restart().is_applied());
        let log = seen.borrow();
        assert_eq!(log.len(), 4);
        assert_eq!(log[1].score, 1);
        assert_eq!(log[2].current_index, 1);
        assert_eq!(log[3].score, 0);
        assert_eq!(log[3].current_index, 0);
        assert_eq!(log[3].state, SessionState::InProgress);
    }

    #[test]
    fn restart_resets_and_resamples() {
        let mut g = game(30, QuizSettings::default());
        let first: Vec<_> = g.session().questions().iter().map(|q| q.id().clone()).collect();
        while !g.session().is_complete() {
            answer_correctly(&mut g);
            g.advance();
        }
        assert_eq!(g.summary().unwrap().correct(), 10);

        assert!(g.restart().is_applied());
        let snap = g.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.current_index, 0);
        assert_eq!(snap.total_questions, 10);
        assert_eq!(g.plays(), 2);
        let second: Vec<_> = g.session().questions().iter().map(|q| q.id().clone()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn restart_mid_question_discards_feedback() {
        let mut g = game(5, QuizSettings::default());
        g.answer("wrong");
        g.restart();
        assert!(!g.snapshot().feedback.is_answered());
        assert!(matches!(g.summary(), Err(SessionError::NotCompleted)));
    }

    #[test]
    fn trim_mode_comes_from_settings() {
        let settings = QuizSettings::new(1, MatchMode::TrimWhitespace).unwrap();
        let mut g = game(4, settings);
        let answer = g.snapshot().current_question.unwrap().correct_answer().to_owned();
        g.answer(&format!("  {answer}  "));
        assert_eq!(g.snapshot().score, 1);
    }

    #[test]
    fn empty_bank_game_is_completed() {
        let g = game(0, QuizSettings::default());
        assert!(g.snapshot().is_completed());
        assert!(g.snapshot().current_question.is_none());
    }
}
