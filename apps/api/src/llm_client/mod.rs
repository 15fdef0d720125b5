//! LLM Client: the single point of entry for all Hugging Face Inference API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the inference API directly.
//! Callers go through the `InferenceBackend` trait so the retry policy in
//! `learning_path::gateway` can be exercised against a scripted backend.
//!
//! This client makes exactly one request per call. Retry and model fallback are
//! the gateway's job, not ours.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Candidate models, highest priority first.
pub const CANDIDATE_MODELS: &[&str] = &[
    "microsoft/DialoGPT-large",
    "microsoft/DialoGPT-medium",
    "gpt2-large",
    "gpt2-medium",
    "gpt2",
];

const MAX_NEW_TOKENS: u32 = 800;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const LOG_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl LlmError {
    /// HTTP status reported by the service. `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            LlmError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub do_sample: bool,
    /// Only return newly generated text, not the prompt.
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            do_sample: true,
            return_full_text: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParameters,
}

/// One text-generation request against one model.
///
/// `Ok` carries the raw 2xx response body; any other status comes back as
/// `LlmError::Api` so callers can branch on it.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Hugging Face Inference API client.
#[derive(Clone)]
pub struct HfInferenceClient {
    client: Client,
    api_key: String,
    base_url: String,
    parameters: GenerationParameters,
}

impl HfInferenceClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            base_url,
            parameters: GenerationParameters::default(),
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model)
    }
}

#[async_trait]
impl InferenceBackend for HfInferenceClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let request_body = InferenceRequest {
            inputs: prompt,
            parameters: &self.parameters,
        };

        let response = self
            .client
            .post(self.model_url(model))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(
            "Model {} responded {}: {}",
            model,
            status,
            body.chars().take(LOG_PREVIEW_CHARS).collect::<String>()
        );

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}
