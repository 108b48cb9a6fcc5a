use std::env;
use std::time::Duration;

pub const API_KEY_VAR: &str = "QUIZ_AI_API_KEY";
pub const FALLBACK_API_KEY_VAR: &str = "GROQ_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";
pub const DEFAULT_LANGUAGE: &str = "French";
pub const DEFAULT_SUBJECT: &str = "the course material";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the hosted chat-completion endpoint.
#[derive(Clone, Debug)]
pub struct ExplanationConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl ExplanationConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source. `None` when no credential
    /// is configured.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| lookup(FALLBACK_API_KEY_VAR))
            .filter(|value| !value.trim().is_empty())?;
        let base_url = lookup("QUIZ_AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let model = lookup("QUIZ_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
        let timeout = lookup("QUIZ_AI_TIMEOUT_SECS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS), Duration::from_secs);
        Some(Self {
            base_url,
            api_key: api_key.trim().to_string(),
            model,
            timeout,
        })
    }
}

/// Framing of the generated prompt: what is being taught and in which
/// language the model should answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptStyle {
    pub language: String,
    pub subject: String,
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.into(),
            subject: DEFAULT_SUBJECT.into(),
        }
    }
}

impl PromptStyle {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            language: lookup("QUIZ_AI_LANGUAGE")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.language),
            subject: lookup("QUIZ_AI_SUBJECT")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.subject),
        }
    }
}
