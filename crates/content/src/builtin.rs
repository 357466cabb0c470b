//! Question banks shipped with the binary.

use devpath_core::model::{GameKind, QuestionBank};
use tracing::debug;

use crate::error::ContentError;
use crate::record::BankFile;

const FILL_IN_BLANKS: &str = include_str!("../data/fill_in_blanks.json");
const GUESS_OUTPUT: &str = include_str!("../data/guess_output.json");

fn raw(kind: GameKind) -> &'static str {
    match kind {
        GameKind::FillInBlanks => FILL_IN_BLANKS,
        GameKind::GuessOutput => GUESS_OUTPUT,
    }
}

/// Decode and validate the embedded bank for `kind`.
///
/// # Errors
///
/// Returns `ContentError` if the embedded data is malformed or declares a different game.
pub fn bank(kind: GameKind) -> Result<QuestionBank, ContentError> {
    let file = BankFile::from_json(raw(kind))?;
    if file.kind != kind {
        return Err(ContentError::KindMismatch {
            expected: kind,
            found: file.kind,
        });
    }
    let bank = file.into_bank()?;
    debug!(kind = %kind, questions = bank.len(), "loaded built-in bank");
    Ok(bank)
}
