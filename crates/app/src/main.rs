use std::io;
use std::sync::Arc;

use clap::Parser;
use content::{InMemoryBankSource, QuestionBankSource, load_bank_file};
use devpath_core::model::QuizSettings;
use services::{Clock, QuizService, SessionSnapshot};
use tracing::trace;

use devpath::cli::Args;
use devpath::logging;
use devpath::terminal::Terminal;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let settings = QuizSettings::new(args.count, args.match_mode())?;

    // Banks are loaded once here and shared read-only for the whole run.
    let mut banks = InMemoryBankSource::with_builtin_banks()?;
    if let Some(path) = args.bank.as_ref() {
        banks.insert_bank(load_bank_file(path)?);
    }

    if args.list {
        for kind in banks.kinds() {
            let size = banks.bank(kind)?.len();
            println!("{kind:<16} {:<20} {size} questions", kind.title());
        }
        return Ok(());
    }

    let mut service =
        QuizService::new(Clock::default_clock(), Arc::new(banks)).with_settings(settings);
    if let Some(seed) = args.seed {
        service = service.with_seed(seed);
    }

    let kind = args.game.ok_or("a game is required")?;
    let mut game = service.start_game(kind)?;
    game.subscribe(|snap: &SessionSnapshot| {
        trace!(
            index = snap.current_index,
            score = snap.score,
            state = ?snap.state,
            "snapshot"
        );
    });

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());
    terminal.play(&mut game)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
