use crate::config::AppConfig;
use crate::error::GenerationError;
use async_trait::async_trait;
use openrouter_api::{
    models::provider_preferences::ProviderPreferences,
    models::provider_preferences::ProviderSort,
    types::chat::{ChatCompletionRequest, Message},
};
use serde::Serialize;

use super::prompt::SYSTEM_PROMPT;

/// Anything that can turn a prompt into the model's full text reply.
#[async_trait]
pub trait LessonModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelConfig {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl From<&AppConfig> for ModelConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: Some(config.temperature),
            max_tokens: Some(config.max_tokens),
        }
    }
}

#[derive(Debug)]
pub struct OpenRouterClient {
    client: openrouter_api::OpenRouterClient<openrouter_api::Ready>,
    config: ModelConfig,
}

impl OpenRouterClient {
    /// Builds a client from `OPENROUTER_API_KEY`.
    pub fn new(config: ModelConfig) -> Result<Self, GenerationError> {
        let client = openrouter_api::OpenRouterClient::quick()
            .map_err(|e| GenerationError::ClientInit(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        let messages = vec![
            Message::text("system", SYSTEM_PROMPT),
            Message::text("user", prompt),
        ];

        let provider = ProviderPreferences::new().with_sort(ProviderSort::Throughput);

        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            provider: Some(provider),
            stream: None,
            response_format: None,
            tools: None,
            tool_choice: None,
            models: None,
            transforms: None,
            route: None,
            user: None,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: None,
            top_k: None,
            frequency_penalty: None,
            presence_penalty: None,
            repetition_penalty: None,
            min_p: None,
            top_a: None,
            seed: None,
            stop: None,
            logit_bias: None,
            logprobs: None,
            top_logprobs: None,
            prediction: None,
            parallel_tool_calls: None,
            verbosity: None,
        }
    }
}

#[async_trait]
impl LessonModel for OpenRouterClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = self.build_request(prompt);

        let response = self
            .client
            .chat()
            .map_err(|e| GenerationError::ClientInit(e.to_string()))?
            .chat_completion(request)
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let choice = response
            .choices
            .first()
            .ok_or(GenerationError::EmptyResponse)?;

        match &choice.message.content {
            openrouter_api::MessageContent::Text(text) => Ok(text.clone()),
            openrouter_api::MessageContent::Parts(parts) => {
                let text_parts: Vec<String> = parts
                    .iter()
                    .filter_map(|p| {
                        if let openrouter_api::ContentPart::Text(tc) = p {
                            Some(tc.text.clone())
                        } else {
                            None
                        }
                    })
                    .collect();
                Ok(text_parts.join("\n"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_model_config_from_app_config() {
        let app = AppConfig {
            model: "google/gemini-flash-1.5".to_string(),
            temperature: 0.4,
            max_tokens: 1024,
            timeout: Duration::from_secs(5),
            ..AppConfig::default()
        };
        let config = ModelConfig::from(&app);
        assert_eq!(config.model, "google/gemini-flash-1.5");
        assert_eq!(config.temperature, Some(0.4));
        assert_eq!(config.max_tokens, Some(1024));
    }

    #[test]
    fn test_model_config_omits_unset_fields() {
        let config = ModelConfig {
            model: "m".to_string(),
            temperature: None,
            max_tokens: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"model":"m"}"#);
    }
}
