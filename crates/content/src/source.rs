use std::collections::HashMap;

use devpath_core::model::{GameKind, QuestionBank};

use crate::builtin;
use crate::error::ContentError;

/// Where question banks come from.
pub trait QuestionBankSource: Send + Sync {
    /// Fetch the bank for a game.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if the source has no bank for `kind`.
    fn bank(&self, kind: GameKind) -> Result<QuestionBank, ContentError>;

    /// Games this source can serve, in a stable order.
    fn kinds(&self) -> Vec<GameKind>;
}

/// Banks held in memory, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBankSource {
    banks: HashMap<GameKind, QuestionBank>,
}

impl InMemoryBankSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source preloaded with every built-in bank.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if an embedded bank fails to decode.
    pub fn with_builtin_banks() -> Result<Self, ContentError> {
        let mut source = Self::new();
        for kind in GameKind::ALL {
            source.insert_bank(builtin::bank(kind)?);
        }
        Ok(source)
    }

    /// Add or replace the bank for its game.
    pub fn insert_bank(&mut self, bank: QuestionBank) {
        self.banks.insert(bank.kind(), bank);
    }

    #[must_use]
    pub fn with_bank(mut self, bank: QuestionBank) -> Self {
        self.insert_bank(bank);
        self
    }
}

impl QuestionBankSource for InMemoryBankSource {
    fn bank(&self, kind: GameKind) -> Result<QuestionBank, ContentError> {
        self.banks
            .get(&kind)
            .cloned()
            .ok_or(ContentError::NotFound(kind))
    }

    fn kinds(&self) -> Vec<GameKind> {
        let mut kinds: Vec<_> = self.banks.keys().copied().collect();
        kinds.sort();
        kinds
    }
}
