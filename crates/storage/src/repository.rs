use async_trait::async_trait;
use quiz_core::model::{CourseId, Question};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Problems with the content of a question file.
///
/// `record` is the 1-based position of the offending object in the JSON array.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    #[error("{file}: not valid JSON after removing comments and blank lines: {message}")]
    Syntax { file: String, message: String },

    #[error("{file}: expected a JSON list of questions")]
    NotAList { file: String },

    #[error("{file}: question #{record} is not a JSON object")]
    NotAnObject { file: String, record: usize },

    #[error("{file}: question #{record} is missing the required field '{field}'")]
    MissingField {
        file: String,
        record: usize,
        field: &'static str,
    },

    #[error("{file}: question #{record} has an invalid '{field}': {message}")]
    InvalidField {
        file: String,
        record: usize,
        field: &'static str,
        message: String,
    },

    #[error("{file}: question #{record} is unusable: {reason}")]
    InvalidQuestion {
        file: String,
        record: usize,
        reason: String,
    },
}

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("cannot read question file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Source of the question bank.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load every question, in file order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Format` when the source is malformed, or other
    /// storage errors when it cannot be read.
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Human-readable name of the source, used in diagnostics.
    fn describe(&self) -> String;
}

/// Fixed question bank for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<[Question]>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.questions.to_vec())
    }

    fn describe(&self) -> String {
        "in-memory question bank".to_string()
    }
}

/// Sorted, de-duplicated courses present in the bank.
#[must_use]
pub fn course_ids(questions: &[Question]) -> Vec<CourseId> {
    questions
        .iter()
        .map(|question| question.course().clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
