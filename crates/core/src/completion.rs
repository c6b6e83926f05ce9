use async_openai::{
    Client,
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use std::time::Duration;
use tracing::debug;

/// Chat model used when none is configured.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// A single two-message completion request: a system persona plus one user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_message: String,
    /// Sampling temperature (0.0 = deterministic, 1.0 = creative).
    pub temperature: f32,
    /// Upper bound on the number of generated tokens.
    pub max_tokens: u32,
}

/// Failures surfaced by a completion backend.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error(transparent)]
    Api(#[from] OpenAIError),
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

/// The language-model service that turns a prompt into generated text.
///
/// Strategies only see this trait, so the core can be exercised without a
/// live network dependency by substituting a stub implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Makes a single, non-streaming completion call and returns the generated text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

/// An implementation of `CompletionBackend` for any OpenAI-compatible API.
pub struct OpenAICompatibleBackend {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAICompatibleBackend {
    /// Creates a new backend for an OpenAI-compatible service.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration for the OpenAI client, including API key and base URL.
    /// * `model` - The chat model identifier to use (e.g., "gpt-4o-mini").
    ///
    /// Each request is attempted once: rate limits and server errors are
    /// reported to the caller instead of being retried.
    pub fn new(config: OpenAIConfig, model: String) -> Self {
        Self {
            client: Client::with_config(config).with_backoff(single_attempt()),
            model,
        }
    }

    /// Applies a per-request deadline to every call made through this backend.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client: self.client.with_http_client(http_client),
            model: self.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionBackend for OpenAICompatibleBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        #[allow(deprecated)]
        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(request.system_prompt)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(request.user_message)
                    .build()?
                    .into(),
            ])
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build()?;

        debug!(model = %self.model, "Sending chat completion request");
        let response: CreateChatCompletionResponse = self.client.chat().create(chat_request).await?;
        first_message_text(response)
    }
}

/// A backoff policy that gives up as soon as the first attempt has failed.
fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Extracts the text of the first choice, rejecting responses with nothing to show.
fn first_message_text(response: CreateChatCompletionResponse) -> Result<String, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::MalformedResponse("no choices returned".to_string()))?;

    match choice.message.content {
        Some(content) if !content.is_empty() => Ok(content),
        Some(_) => Err(CompletionError::MalformedResponse(
            "first choice has empty content".to_string(),
        )),
        None => Err(CompletionError::MalformedResponse(
            "first choice has no content".to_string(),
        )),
    }
}
