use std::sync::Arc;

use content::QuestionBankSource;
use devpath_core::Clock;
use devpath_core::model::{GameKind, QuizSettings};
use tracing::debug;

use super::game::QuizGame;
use super::sampler::SessionSampler;
use crate::error::SessionError;

/// Entry point for presentation layers: looks up banks and starts games.
///
/// This service owns the time source, the bank source and the quiz settings.
/// It does **not** own rendering.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    banks: Arc<dyn QuestionBankSource>,
    settings: QuizSettings,
    seed: Option<u64>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, banks: Arc<dyn QuestionBankSource>) -> Self {
        Self {
            clock,
            banks,
            settings: QuizSettings::default(),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Draw sessions from a fixed seed so runs can be replayed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn available_games(&self) -> Vec<GameKind> {
        self.banks.kinds()
    }

    /// Start a new game for `kind`, drawing its first session.
    ///
    /// An empty bank is not an error: the game starts already completed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Content` if the bank source has no bank for `kind`.
    pub fn start_game(&self, kind: GameKind) -> Result<QuizGame, SessionError> {
        let bank = self.banks.bank(kind)?;
        debug!(kind = %kind, bank_size = bank.len(), seeded = self.seed.is_some(), "starting game");
        let sampler = self
            .seed
            .map_or_else(SessionSampler::from_entropy, SessionSampler::seeded);
        Ok(QuizGame::new(bank, self.settings.clone(), sampler, self.clock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::{ContentError, InMemoryBankSource};
    use devpath_core::model::QuestionBank;
    use devpath_core::time::fixed_clock;

    #[test]
    fn unknown_game_surfaces_content_error() {
        let service = QuizService::new(fixed_clock(), Arc::new(InMemoryBankSource::new()));
        let err = service.start_game(GameKind::GuessOutput).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Content(ContentError::NotFound(GameKind::GuessOutput))
        ));
    }

    #[test]
    fn seeded_service_replays_the_same_session() {
        let banks = Arc::new(InMemoryBankSource::with_builtin_banks().unwrap());
        let service = QuizService::new(fixed_clock(), banks).with_seed(3);
        let a = service.start_game(GameKind::GuessOutput).unwrap();
        let b = service.start_game(GameKind::GuessOutput).unwrap();
        assert_eq!(a.session().questions(), b.session().questions());
    }

    #[test]
    fn lists_games_from_source() {
        let banks = InMemoryBankSource::new().with_bank(QuestionBank::empty(GameKind::FillInBlanks));
        let service = QuizService::new(fixed_clock(), Arc::new(banks));
        assert_eq!(service.available_games(), vec![GameKind::FillInBlanks]);
        assert!(service.start_game(GameKind::FillInBlanks).unwrap().snapshot().is_completed());
    }
}
