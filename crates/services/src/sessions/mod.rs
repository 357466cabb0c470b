mod game;
mod matcher;
mod progress;
mod sampler;
mod service;
mod state;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use game::QuizGame;
pub use matcher::{AnswerMatcher, ExactMatch, FnMatcher, QuizItem, TrimmedMatch, matcher_for};
pub use progress::SessionProgress;
pub use sampler::{SessionPlan, SessionSampler, sample};
pub use service::QuizService;
pub use state::{AnswerRecord, Feedback, IgnoreReason, QuizSession, SessionState, Transition};
pub use view::{SessionObserver, SessionSnapshot};
