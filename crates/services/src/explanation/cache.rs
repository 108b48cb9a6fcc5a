use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

use super::prompt::ExplanationPrompt;

/// Successful explanations keyed by a hash of the answered question.
///
/// Asking twice about the same question, choices and answer reuses the first
/// reply instead of calling the model again.
#[derive(Clone, Default)]
pub struct ExplanationCache {
    entries: Arc<Mutex<HashMap<u64, String>>>,
}

impl ExplanationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn key(prompt: &ExplanationPrompt<'_>) -> u64 {
        let mut hasher = DefaultHasher::new();
        prompt.hash(&mut hasher);
        hasher.finish()
    }

    #[must_use]
    pub fn get(&self, prompt: &ExplanationPrompt<'_>) -> Option<String> {
        let guard = self.entries.lock().ok()?;
        guard.get(&Self::key(prompt)).cloned()
    }

    pub fn insert(&self, prompt: &ExplanationPrompt<'_>, explanation: impl Into<String>) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.insert(Self::key(prompt), explanation.into());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |guard| guard.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
