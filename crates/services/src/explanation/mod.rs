//! Advisory explanations of answered questions from a hosted language model.

use async_trait::async_trait;
use tracing::warn;

use crate::error::ExplanationError;

mod cache;
mod client;
mod config;
mod prompt;

pub use cache::ExplanationCache;
pub use client::ExplanationService;
pub use config::{
    API_KEY_VAR, DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_MODEL, DEFAULT_SUBJECT,
    DEFAULT_TIMEOUT_SECS, ExplanationConfig, FALLBACK_API_KEY_VAR, PromptStyle,
};
pub use prompt::ExplanationPrompt;

pub const MISSING_CREDENTIAL_WARNING: &str = "⚠️ Explanations are not configured (missing QUIZ_AI_API_KEY).\nSet it in the environment to enable this feature.";

/// Anything that can turn a prompt into explanation text.
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    /// Whether a credential is configured. Disabled providers answer
    /// `ExplanationError::Disabled` without any network traffic.
    fn enabled(&self) -> bool;

    /// # Errors
    ///
    /// Returns `ExplanationError` when no text could be produced.
    async fn explain(&self, prompt: &str) -> Result<String, ExplanationError>;
}

impl ExplanationError {
    /// Text shown to the learner instead of an explanation.
    #[must_use]
    pub fn warning(&self) -> String {
        match self {
            Self::Disabled => MISSING_CREDENTIAL_WARNING.to_string(),
            Self::Rejected { detail, .. } => {
                format!("⚠️ The explanation service rejected the request: {detail}")
            }
            other => format!("⚠️ Could not fetch an explanation: {other}"),
        }
    }
}

/// Log a failed explanation and return the warning shown in its place.
#[must_use]
pub fn explanation_warning(err: &ExplanationError) -> String {
    if !matches!(err, ExplanationError::Disabled) {
        warn!(error = %err, "explanation request failed");
    }
    err.warning()
}
