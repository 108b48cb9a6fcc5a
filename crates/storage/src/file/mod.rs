use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::model::Question;
use tracing::{debug, info};

use crate::repository::{QuestionRepository, StorageError};

mod parse;

pub use parse::{parse_question_bank, strip_comments};

/// Parsed question banks keyed by file path.
///
/// Clones share the same table, so several repositories (or a reload after a
/// restart) can reuse a bank that was already parsed.
#[derive(Clone, Default)]
pub struct QuestionCache {
    banks: Arc<Mutex<HashMap<PathBuf, Arc<[Question]>>>>,
}

impl QuestionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, path: &Path) -> Result<Option<Arc<[Question]>>, StorageError> {
        let guard = self
            .banks
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(path).cloned())
    }

    fn insert(&self, path: PathBuf, bank: Arc<[Question]>) -> Result<(), StorageError> {
        let mut guard = self
            .banks
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(path, bank);
        Ok(())
    }
}

/// Question bank read from a comment-tolerant JSON file on disk.
#[derive(Clone)]
pub struct QuestionFileRepository {
    path: PathBuf,
    cache: QuestionCache,
}

impl QuestionFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: QuestionCache::new(),
        }
    }

    #[must_use]
    pub fn with_cache(mut self, cache: QuestionCache) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file, bypassing and then refreshing the cache.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be read and
    /// `StorageError::Format` if it is malformed.
    pub async fn reload(&self) -> Result<Arc<[Question]>, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;
        let bank: Arc<[Question]> =
            parse_question_bank(&self.path.display().to_string(), &raw)?.into();
        info!(
            path = %self.path.display(),
            questions = bank.len(),
            "question bank loaded"
        );
        self.cache.insert(self.path.clone(), Arc::clone(&bank))?;
        Ok(bank)
    }

    /// Cached bank when available, otherwise a fresh parse.
    ///
    /// # Errors
    ///
    /// Same as [`QuestionFileRepository::reload`].
    pub async fn bank(&self) -> Result<Arc<[Question]>, StorageError> {
        if let Some(bank) = self.cache.get(&self.path)? {
            debug!(path = %self.path.display(), "question bank cache hit");
            return Ok(bank);
        }
        self.reload().await
    }
}

#[async_trait]
impl QuestionRepository for QuestionFileRepository {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.bank().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
