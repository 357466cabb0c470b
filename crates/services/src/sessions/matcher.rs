use devpath_core::model::{MatchMode, Question, QuestionId};

/// What the session needs to know about a question.
pub trait QuizItem {
    fn id(&self) -> &QuestionId;
    fn correct_answer(&self) -> &str;
}

impl QuizItem for Question {
    fn id(&self) -> &QuestionId {
        Question::id(self)
    }

    fn correct_answer(&self) -> &str {
        Question::correct_answer(self)
    }
}

/// Decides whether a submission answers a question.
pub trait AnswerMatcher<Q: ?Sized> {
    fn matches(&self, question: &Q, submitted: &str) -> bool;
}

impl<Q: ?Sized, M: AnswerMatcher<Q> + ?Sized> AnswerMatcher<Q> for Box<M> {
    fn matches(&self, question: &Q, submitted: &str) -> bool {
        (**self).matches(question, submitted)
    }
}

/// Case-sensitive, untrimmed equality. Used by both built-in games.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl<Q: QuizItem + ?Sized> AnswerMatcher<Q> for ExactMatch {
    fn matches(&self, question: &Q, submitted: &str) -> bool {
        question.correct_answer() == submitted
    }
}

/// Equality after trimming surrounding whitespace on both sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimmedMatch;

impl<Q: QuizItem + ?Sized> AnswerMatcher<Q> for TrimmedMatch {
    fn matches(&self, question: &Q, submitted: &str) -> bool {
        question.correct_answer().trim() == submitted.trim()
    }
}

/// Adapts a closure into a matcher, for quiz types with their own rules.
#[derive(Clone, Copy)]
pub struct FnMatcher<F>(pub F);

impl<Q: ?Sized, F> AnswerMatcher<Q> for FnMatcher<F>
where
    F: Fn(&Q, &str) -> bool,
{
    fn matches(&self, question: &Q, submitted: &str) -> bool {
        (self.0)(question, submitted)
    }
}

#[must_use]
pub fn matcher_for(mode: MatchMode) -> Box<dyn AnswerMatcher<Question>> {
    match mode {
        MatchMode::Strict => Box::new(ExactMatch),
        MatchMode::TrimWhitespace => Box::new(TrimmedMatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devpath_core::model::QuestionDraft;

    fn blank(answer: &str) -> Question {
        QuestionDraft::fill_in_blank("q", "", "", answer)
            .validate()
            .unwrap()
    }

    #[test]
    fn exact_match_is_case_sensitive_and_untrimmed() {
        let q = blank("println");
        assert!(ExactMatch.matches(&q, "println"));
        assert!(!ExactMatch.matches(&q, "Println"));
        assert!(!ExactMatch.matches(&q, " println"));
    }

    #[test]
    fn trimmed_match_ignores_surrounding_whitespace_only() {
        let q = blank("i++");
        assert!(TrimmedMatch.matches(&q, "  i++\n"));
        assert!(!TrimmedMatch.matches(&q, "I++"));
    }

    #[test]
    fn closure_matcher_is_pluggable() {
        let q = blank("True");
        let lenient = FnMatcher(|q: &Question, s: &str| q.correct_answer().eq_ignore_ascii_case(s));
        assert!(lenient.matches(&q, "true"));
    }

    #[test]
    fn matcher_for_follows_mode() {
        let q = blank("x");
        assert!(!matcher_for(MatchMode::Strict).matches(&q, " x"));
        assert!(matcher_for(MatchMode::TrimWhitespace).matches(&q, " x"));
    }
}
