use std::path::Path;

use devpath_core::model::QuestionBank;
use tracing::debug;

use crate::error::ContentError;
use crate::record::BankFile;

/// Read a bank from a JSON file on disk.
///
/// # Errors
///
/// Returns `ContentError::Io` if the file cannot be read, or a parse/validation error.
pub fn load_bank_file(path: impl AsRef<Path>) -> Result<QuestionBank, ContentError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bank = BankFile::from_json(&text)?.into_bank()?;
    debug!(path = %path.display(), kind = %bank.kind(), questions = bank.len(), "loaded bank file");
    Ok(bank)
}
