#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod explanation;
pub mod quiz;

pub use app_services::AppServices;
pub use error::{AppServicesError, ExplanationError, SessionError};
pub use explanation::{
    ExplanationCache, ExplanationConfig, ExplanationPrompt, ExplanationProvider,
    ExplanationService, MISSING_CREDENTIAL_WARNING, PromptStyle,
};
pub use quiz::{QuizAnswerResult, QuizLoopService, select_questions};
