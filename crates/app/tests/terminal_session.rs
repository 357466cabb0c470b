use std::io::Cursor;
use std::sync::Arc;

use content::InMemoryBankSource;
use devpath::terminal::Terminal;
use devpath_core::model::{GameKind, QuestionBank, QuestionDraft};
use devpath_core::time::fixed_clock;
use services::{QuizGame, QuizService};

fn game_with(questions: &[(&str, &str)]) -> QuizGame {
    let questions = questions
        .iter()
        .map(|(id, answer)| {
            QuestionDraft::fill_in_blank(*id, "let x = ", ";", *answer)
                .with_explanation("Binding a value.")
                .validate()
                .unwrap()
        })
        .collect();
    let bank = QuestionBank::new(GameKind::FillInBlanks, questions).unwrap();
    QuizService::new(
        fixed_clock(),
        Arc::new(InMemoryBankSource::new().with_bank(bank)),
    )
    .with_seed(1)
    .start_game(GameKind::FillInBlanks)
    .unwrap()
}

fn play(game: &mut QuizGame, input: &str) -> String {
    let mut terminal = Terminal::new(Cursor::new(input.as_bytes()), Vec::new());
    terminal.play(game).unwrap();
    String::from_utf8(terminal.into_output()).unwrap()
}

#[test]
fn plays_a_session_to_the_summary() {
    let mut game = game_with(&[("a", "x"), ("b", "y")]);
    let out = play(&mut game, "x\n\nx\n\nn\n");

    assert!(out.contains("== Fill in the Blanks =="));
    assert!(out.contains("let x = ____;"));
    assert!(out.contains("Correct!"));
    assert!(out.contains("Incorrect: you answered \"x\", the answer is \"y\""));
    assert!(out.contains("Binding a value."));
    assert!(out.contains("Finished! 1/2 correct (50%)"));
    assert!(game.snapshot().is_completed());
}

#[test]
fn restart_draws_a_new_session() {
    let mut game = game_with(&[("a", "x")]);
    let out = play(&mut game, "x\n\ny\n");

    assert_eq!(out.matches("Question 1/1").count(), 2);
    assert_eq!(game.plays(), 2);
    assert_eq!(game.snapshot().score, 0);
}

#[test]
fn empty_bank_shows_no_questions_state() {
    let mut game = game_with(&[]);
    let out = play(&mut game, "");
    assert!(out.contains("No questions available for this game."));
}

#[test]
fn windows_line_endings_do_not_leak_into_answers() {
    let mut game = game_with(&[("a", "x")]);
    let out = play(&mut game, "x\r\n\r\n");
    assert!(out.contains("Correct!"));
}

#[test]
fn numeric_option_text_is_scored_as_typed() {
    let question = QuestionDraft::multiple_choice(
        "java-int-division",
        "int a = 7;\nint b = 2;\nSystem.out.println(a / b);",
        ["3.5", "3", "4", "3.0"].map(String::from).to_vec(),
        "3",
    )
    .validate()
    .unwrap();
    let bank = QuestionBank::new(GameKind::GuessOutput, vec![question]).unwrap();
    let mut game = QuizService::new(
        fixed_clock(),
        Arc::new(InMemoryBankSource::new().with_bank(bank)),
    )
    .start_game(GameKind::GuessOutput)
    .unwrap();

    let out = play(&mut game, "3\n\n");
    assert!(out.contains("  4) 4"));
    assert!(out.contains("Correct!"));
    assert_eq!(game.snapshot().score, 1);
}
