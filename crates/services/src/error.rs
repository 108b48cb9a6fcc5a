//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::RoundError;
use storage::repository::StorageError;

/// Errors emitted by explanation providers.
///
/// None of these ever reach the learner as a failure: the quiz loop turns
/// them into a warning string shown in place of the explanation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExplanationError {
    #[error("explanations are not configured")]
    Disabled,
    #[error("explanation service returned an empty response")]
    EmptyResponse,
    #[error("explanation request rejected with status {status}: {detail}")]
    Rejected {
        status: reqwest::StatusCode,
        detail: String,
    },
    #[error("explanation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by quiz session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for this course")]
    Empty,
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
