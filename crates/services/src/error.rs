//! Shared error types for the services crate.

use thiserror::Error;

use content::ContentError;
use devpath_core::model::SummaryError;

/// Errors emitted by session services.
///
/// Invalid quiz transitions are not errors; they are reported as
/// `Transition::Ignored` by the session itself.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session is not completed yet")]
    NotCompleted,
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    Content(#[from] ContentError),
}
