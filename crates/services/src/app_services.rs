use std::sync::Arc;

use quiz_core::model::Question;
use storage::repository::QuestionRepository;
use tracing::info;

use crate::error::AppServicesError;
use crate::explanation::{ExplanationCache, ExplanationProvider, ExplanationService, PromptStyle};
use crate::quiz::QuizLoopService;

/// Assembles app-facing services around a loaded question bank.
#[derive(Clone)]
pub struct AppServices {
    source: String,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Load the bank once and wire the explanation provider from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the question source is unreadable
    /// or malformed.
    pub async fn from_env(repository: &dyn QuestionRepository) -> Result<Self, AppServicesError> {
        Self::new(
            repository,
            Arc::new(ExplanationService::from_env()),
            PromptStyle::from_env(),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the question source is unreadable
    /// or malformed.
    pub async fn new(
        repository: &dyn QuestionRepository,
        explainer: Arc<dyn ExplanationProvider>,
        style: PromptStyle,
    ) -> Result<Self, AppServicesError> {
        let bank: Arc<[Question]> = repository.load_questions().await?.into();
        let source = repository.describe();
        info!(
            source = %source,
            questions = bank.len(),
            explanations = explainer.enabled(),
            "services ready"
        );

        let quiz_loop = QuizLoopService::new(bank, explainer)
            .with_prompt_style(style)
            .with_explanation_cache(ExplanationCache::new());

        Ok(Self {
            source,
            quiz_loop: Arc::new(quiz_loop),
        })
    }

    /// Where the questions came from, for display.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
