#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use devpath_core::Clock;
pub use sessions as session;

pub use error::SessionError;

pub use sessions::{
    AnswerMatcher, AnswerRecord, ExactMatch, Feedback, FnMatcher, IgnoreReason, QuizGame,
    QuizItem, QuizService, QuizSession, SessionObserver, SessionPlan, SessionProgress,
    SessionSampler, SessionSnapshot, SessionState, Transition, TrimmedMatch, matcher_for, sample,
};
