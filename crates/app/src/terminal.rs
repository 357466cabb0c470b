use std::io::{self, BufRead, Write};

use devpath_core::model::{Question, QuestionKind};
use services::{Feedback, QuizGame, SessionSnapshot};

/// Line-oriented front end for a `QuizGame`.
///
/// Reads answers from `input`, renders snapshots to `output`. Stops cleanly at
/// end of input.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the learner declines a restart or input runs out.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading input or writing output.
    pub fn play(&mut self, game: &mut QuizGame) -> io::Result<()> {
        writeln!(self.output, "== {} ==", game.kind().title())?;
        loop {
            let snap = game.snapshot();
            let Some(question) = snap.current_question.as_ref() else {
                self.render_completed(game, &snap)?;
                if self.confirm("Play again? [y/N] ")? {
                    game.restart();
                    continue;
                }
                return Ok(());
            };

            self.render_question(&snap, question)?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            game.answer(&resolve_choice(&line, question.options()));

            self.render_feedback(&game.snapshot(), question)?;
            write!(self.output, "Press Enter to continue ")?;
            self.output.flush()?;
            if self.read_line()?.is_none() {
                return Ok(());
            }
            game.advance();
        }
    }

    fn render_question(&mut self, snap: &SessionSnapshot, question: &Question) -> io::Result<()> {
        writeln!(self.output)?;
        write!(
            self.output,
            "Question {}/{}  score {}  [{}",
            snap.position(),
            snap.total_questions,
            snap.score,
            question.difficulty()
        )?;
        if let Some(language) = question.language() {
            write!(self.output, ", {language}")?;
        }
        writeln!(self.output, "]")?;

        match question.kind() {
            QuestionKind::MultipleChoice { code, options, .. } => {
                writeln!(self.output, "{code}")?;
                writeln!(self.output, "What does this print?")?;
                for (idx, option) in options.iter().enumerate() {
                    writeln!(self.output, "  {}) {option}", idx + 1)?;
                }
                write!(self.output, "Your choice: ")?;
            }
            QuestionKind::FillInBlank { before, after, .. } => {
                writeln!(self.output, "{before}____{after}")?;
                write!(self.output, "Fill in the blank: ")?;
            }
        }
        self.output.flush()
    }

    fn render_feedback(&mut self, snap: &SessionSnapshot, question: &Question) -> io::Result<()> {
        match &snap.feedback {
            Feedback::Correct { .. } => writeln!(self.output, "Correct!")?,
            Feedback::Incorrect { submitted } => writeln!(
                self.output,
                "Incorrect: you answered {submitted:?}, the answer is {:?}",
                question.correct_answer()
            )?,
            Feedback::Unanswered => {}
        }
        if !question.explanation().is_empty() {
            writeln!(self.output, "{}", question.explanation())?;
        }
        Ok(())
    }

    fn render_completed(&mut self, game: &QuizGame, snap: &SessionSnapshot) -> io::Result<()> {
        writeln!(self.output)?;
        if snap.total_questions == 0 {
            return writeln!(self.output, "No questions available for this game.");
        }
        match game.summary() {
            Ok(summary) => writeln!(
                self.output,
                "Finished! {}/{} correct ({}%)",
                summary.correct(),
                summary.total(),
                summary.accuracy_percent()
            ),
            Err(err) => {
                tracing::warn!(error = %err, "summary unavailable");
                writeln!(self.output, "Finished! score {}", snap.score)
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|line| matches!(line.trim(), "y" | "Y" | "yes")))
    }

    /// Next line without its line terminator, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Resolve typed input against the options of a multiple-choice question.
///
/// Option text wins over option numbers, so an option that is itself a number
/// can be typed directly. Input matching neither is submitted verbatim.
#[must_use]
pub fn resolve_choice(input: &str, options: &[String]) -> String {
    let trimmed = input.trim();
    if let Some(option) = options.iter().find(|option| option.as_str() == trimmed) {
        return option.clone();
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| options.get(idx))
        .cloned()
        .unwrap_or_else(|| input.to_owned())
}
