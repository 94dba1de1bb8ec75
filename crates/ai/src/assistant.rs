//! Single-turn question answering over the ledger context.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use rig::{client::CompletionClient, completion::Prompt, providers::groq};

use crate::context::build_system_prompt;
use crate::error::AiError;

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

// ============================================================================
// Assistant Trait
// ============================================================================

/// Answers one free-text question given a plain-text ledger context.
#[async_trait]
pub trait AssistantTrait: Send + Sync {
    async fn ask(&self, question: &str, context: &str) -> Result<String, AiError>;
}

// ============================================================================
// Groq Implementation
// ============================================================================

/// Configuration for the Groq-backed assistant.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// Assistant calling Groq's chat completions through rig-core.
pub struct GroqAssistant {
    config: AssistantConfig,
}

impl GroqAssistant {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl AssistantTrait for GroqAssistant {
    async fn ask(&self, question: &str, context: &str) -> Result<String, AiError> {
        let question = validate_question(question)?;
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AiError::MissingApiKey("groq".to_string()))?;

        debug!("Asking assistant with model {}", self.config.model);

        let preamble = build_system_prompt(context);
        let client: groq::Client<HttpClient> =
            groq::Client::new(key).map_err(|e| AiError::Provider(e.to_string()))?;
        let answer = client
            .agent(&self.config.model)
            .preamble(&preamble)
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_tokens)
            .build()
            .prompt(&question)
            .await
            .map_err(|e| {
                warn!("Assistant request failed: {}", e);
                AiError::Provider(e.to_string())
            })?;

        Ok(answer)
    }
}

fn validate_question(question: &str) -> Result<String, AiError> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(AiError::invalid_input("Question cannot be empty"));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Fake Provider for Testing
// ============================================================================

/// A fake assistant that answers deterministically without network access.
pub struct FakeAssistant {
    /// Fixed answer, or None to echo the context back.
    pub fixed_answer: Option<String>,
}

impl FakeAssistant {
    /// Create a fake assistant that returns a fixed answer.
    pub fn with_answer(answer: &str) -> Self {
        Self {
            fixed_answer: Some(answer.to_string()),
        }
    }

    /// Create a fake assistant that echoes the context it was given.
    pub fn echo() -> Self {
        Self { fixed_answer: None }
    }
}

#[async_trait]
impl AssistantTrait for FakeAssistant {
    async fn ask(&self, question: &str, context: &str) -> Result<String, AiError> {
        validate_question(question)?;
        Ok(self
            .fixed_answer
            .clone()
            .unwrap_or_else(|| context.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key() {
        let assistant = GroqAssistant::new(AssistantConfig::default());
        let err = assistant
            .ask("How much do I owe?", "Current Month: April 2024")
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey(ref p) if p == "groq"));
    }

    #[tokio::test]
    async fn test_blank_api_key_counts_as_missing() {
        let assistant = GroqAssistant::new(AssistantConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        });
        assert!(matches!(
            assistant.ask("Hi", "").await,
            Err(AiError::MissingApiKey(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_question_rejected_before_key_check() {
        let assistant = GroqAssistant::new(AssistantConfig::default());
        assert!(matches!(
            assistant.ask("   ", "ctx").await,
            Err(AiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = AssistantConfig::default();
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 1024);
    }

    #[tokio::test]
    async fn test_fake_assistant() {
        let fixed = FakeAssistant::with_answer("You owe 3120.00");
        assert_eq!(fixed.ask("How much?", "ctx").await.unwrap(), "You owe 3120.00");

        let echo = FakeAssistant::echo();
        assert_eq!(echo.ask("How much?", "ctx").await.unwrap(), "ctx");
        assert!(echo.ask("", "ctx").await.is_err());
    }
}
