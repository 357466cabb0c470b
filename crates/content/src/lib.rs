#![forbid(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod file;
pub mod record;
pub mod source;

pub use error::ContentError;
pub use file::load_bank_file;
pub use record::{BankFile, QuestionBody, QuestionRecord};
pub use source::{InMemoryBankSource, QuestionBankSource};
