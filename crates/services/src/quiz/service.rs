use std::fmt;
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use quiz_core::model::{
    CourseFilter, CourseId, FinalScore, Question, QuizSession, RoundError, RoundFeedback,
};
use storage::repository::course_ids;

use crate::error::SessionError;
use crate::explanation::{
    ExplanationCache, ExplanationPrompt, ExplanationProvider, PromptStyle, explanation_warning,
};
use super::selection::select_questions;

/// Result of answering a single question in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAnswerResult {
    pub feedback: RoundFeedback,
    pub is_complete: bool,
    pub final_score: Option<FinalScore>,
}

/// Orchestrates session start and answering, including the explanation call.
///
/// The bank is shared read-only; sessions are owned by the caller.
#[derive(Clone)]
pub struct QuizLoopService {
    bank: Arc<[Question]>,
    explainer: Arc<dyn ExplanationProvider>,
    style: PromptStyle,
    cache: Option<ExplanationCache>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(bank: Arc<[Question]>, explainer: Arc<dyn ExplanationProvider>) -> Self {
        Self {
            bank,
            explainer,
            style: PromptStyle::default(),
            cache: None,
        }
    }

    #[must_use]
    pub fn with_prompt_style(mut self, style: PromptStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_explanation_cache(mut self, cache: ExplanationCache) -> Self {
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub fn explanations_enabled(&self) -> bool {
        self.explainer.enabled()
    }

    /// Courses present in the bank, sorted.
    #[must_use]
    pub fn courses(&self) -> Vec<CourseId> {
        course_ids(&self.bank)
    }

    /// Selector options: `All` followed by every course.
    #[must_use]
    pub fn course_filters(&self) -> Vec<CourseFilter> {
        std::iter::once(CourseFilter::All)
            .chain(self.courses().into_iter().map(CourseFilter::Course))
            .collect()
    }

    /// Start a fresh session with an unseeded shuffle.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` when no question matches `filter`.
    pub fn start_session(&self, filter: &CourseFilter) -> Result<QuizSession, SessionError> {
        self.start_session_with_rng(filter, &mut rand::rng())
    }

    /// # Errors
    ///
    /// Returns `SessionError::Empty` when no question matches `filter`.
    pub fn start_session_with_rng<R: Rng + ?Sized>(
        &self,
        filter: &CourseFilter,
        rng: &mut R,
    ) -> Result<QuizSession, SessionError> {
        let selection = select_questions(filter, &self.bank, rng);
        if selection.is_empty() {
            return Err(SessionError::Empty);
        }
        info!(course = %filter, questions = selection.len(), "quiz session started");
        Ok(QuizSession::new(selection))
    }

    /// Grade the current question, then fetch its explanation.
    ///
    /// Score and progress are settled before the explanation call, so an
    /// explanation failure only changes the text shown to the learner.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Round` when the session is complete or the
    /// choice does not exist.
    pub async fn answer_current(
        &self,
        session: &mut QuizSession,
        chosen: usize,
    ) -> Result<QuizAnswerResult, SessionError> {
        let question = session
            .current_question()
            .cloned()
            .ok_or(RoundError::Completed)?;
        session.submit_answer(chosen)?;

        let explanation = self.explain(&question, chosen).await;
        session.record_explanation(explanation);

        let feedback = session
            .last_round()
            .cloned()
            .ok_or(RoundError::Completed)?;
        let is_complete = session.is_complete();
        Ok(QuizAnswerResult {
            feedback,
            is_complete,
            final_score: is_complete.then(|| session.final_score()),
        })
    }

    /// Explanation for `chosen` on `question`, or a warning when none is
    /// available.
    pub async fn explain(&self, question: &Question, chosen: usize) -> String {
        let prompt = ExplanationPrompt::for_answer(question, chosen);
        if let Some(cached) = self.cache.as_ref().and_then(|cache| cache.get(&prompt)) {
            debug!("explanation cache hit");
            return cached;
        }

        let rendered = prompt.render(&self.style);
        match self.explainer.explain(&rendered).await {
            Ok(text) => {
                if let Some(cache) = &self.cache {
                    cache.insert(&prompt, text.clone());
                }
                text
            }
            Err(err) => explanation_warning(&err),
        }
    }
}

impl fmt::Debug for QuizLoopService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizLoopService")
            .field("bank_len", &self.bank.len())
            .field("explanations_enabled", &self.explainer.enabled())
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
