use devpath_core::model::Question;

use super::state::{Feedback, SessionState};

/// Read-only picture of a session after a transition.
///
/// Presentation layers render from snapshots instead of reaching into the
/// session, so every transition produces a fresh value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot<Q = Question> {
    /// `None` once the session is completed.
    pub current_question: Option<Q>,
    pub current_index: usize,
    pub total_questions: usize,
    pub score: u32,
    pub feedback: Feedback,
    pub state: SessionState,
}

impl<Q> SessionSnapshot<Q> {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// 1-based position for display, capped at the total.
    #[must_use]
    pub fn position(&self) -> usize {
        (self.current_index + 1).min(self.total_questions)
    }
}

/// Receives a snapshot after every applied transition.
pub trait SessionObserver {
    fn on_snapshot(&mut self, snapshot: &SessionSnapshot);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionSnapshot),
{
    fn on_snapshot(&mut self, snapshot: &SessionSnapshot) {
        self(snapshot);
    }
}
