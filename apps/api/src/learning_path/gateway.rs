//! Path Generator Gateway: asks the inference service for a learning plan, one model
//! at a time, and falls back to the local template when nothing usable comes back.
//!
//! The attempt loop is an explicit state machine:
//!
//! | outcome of an attempt    | next state                                      |
//! |--------------------------|-------------------------------------------------|
//! | 2xx                      | `Succeeded`                                     |
//! | 503 (model warming up)   | `Retry` after the backoff, or `NextModel` once  |
//! |                          | the model has used all of its tries             |
//! | 401                      | `Aborted`: no more models, no fallback          |
//! | other status / transport | `NextModel`                                     |
//!
//! `NextModel` past the last candidate is `ExhaustedFallback`. Requests never overlap,
//! and there is no deadline across the whole sequence.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::learning_path::fallback::fallback_path;
use crate::learning_path::prompts::build_learning_path_prompt;
use crate::learning_path::response::{parse_steps, InferenceOutput, StepsError};
use crate::learning_path::{GeneratedPath, PathRequest};
use crate::llm_client::{InferenceBackend, LlmError, CANDIDATE_MODELS};

/// Tries per model, counting the first.
pub const MAX_TRIES_PER_MODEL: u32 = 3;
/// Wait between tries while a model is warming up.
pub const WARMUP_BACKOFF: Duration = Duration::from_secs(2);

pub const MSG_ALL_MODELS_FAILED: &str =
    "All models failed or unavailable. Using fallback learning path.";
pub const MSG_UNEXPECTED_FORMAT: &str =
    "Unexpected API response format, using fallback learning path.";
pub const MSG_UNPARSABLE_STEPS: &str =
    "Could not parse AI response as JSON, using fallback learning path.";
pub const MSG_MALFORMED_STEPS: &str =
    "AI response parsing failed, using fallback learning path.";

#[derive(Debug)]
enum AttemptState {
    TryModel { index: usize, tries_left: u32 },
    Retry { index: usize, tries_left: u32 },
    NextModel { index: usize },
    Aborted(LlmError),
    Succeeded { model: String, body: String },
    ExhaustedFallback,
}

/// Decides where an attempt against model `index` leads.
fn transition(
    index: usize,
    tries_left: u32,
    model: &str,
    outcome: Result<String, LlmError>,
) -> AttemptState {
    let err = match outcome {
        Ok(body) => {
            return AttemptState::Succeeded {
                model: model.to_string(),
                body,
            }
        }
        Err(err) => err,
    };

    match err.status() {
        Some(503) => {
            let tries_left = tries_left.saturating_sub(1);
            if tries_left > 0 {
                AttemptState::Retry { index, tries_left }
            } else {
                warn!("Model {model} still loading after {MAX_TRIES_PER_MODEL} tries");
                AttemptState::NextModel { index }
            }
        }
        Some(401) => AttemptState::Aborted(err),
        _ => {
            warn!("Model {model} failed: {err}");
            AttemptState::NextModel { index }
        }
    }
}

pub struct PathGateway {
    backend: Arc<dyn InferenceBackend>,
    models: Vec<String>,
    max_tries: u32,
    backoff: Duration,
}

impl PathGateway {
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self {
            backend,
            models: CANDIDATE_MODELS.iter().map(|m| m.to_string()).collect(),
            max_tries: MAX_TRIES_PER_MODEL,
            backoff: WARMUP_BACKOFF,
        }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Produces a learning plan for `request`.
    ///
    /// Only an authentication failure is an error; every other failure ends in the
    /// local template with `used_fallback = true`.
    pub async fn generate_path(&self, request: &PathRequest) -> Result<GeneratedPath, AppError> {
        let prompt = build_learning_path_prompt(request);

        let mut state = if self.models.is_empty() {
            AttemptState::ExhaustedFallback
        } else {
            AttemptState::TryModel {
                index: 0,
                tries_left: self.max_tries,
            }
        };

        loop {
            state = match state {
                AttemptState::TryModel { index, tries_left } => {
                    let model = &self.models[index];
                    info!(
                        "Trying model {} ({} of {} tries left)",
                        model, tries_left, self.max_tries
                    );
                    let outcome = self.backend.generate(model, &prompt).await;
                    transition(index, tries_left, model, outcome)
                }
                AttemptState::Retry { index, tries_left } => {
                    info!(
                        "Model {} is loading, retrying in {}ms",
                        self.models[index],
                        self.backoff.as_millis()
                    );
                    tokio::time::sleep(self.backoff).await;
                    AttemptState::TryModel { index, tries_left }
                }
                AttemptState::NextModel { index } => {
                    if index + 1 < self.models.len() {
                        AttemptState::TryModel {
                            index: index + 1,
                            tries_left: self.max_tries,
                        }
                    } else {
                        AttemptState::ExhaustedFallback
                    }
                }
                AttemptState::Aborted(err) => {
                    return Err(AppError::UpstreamUnauthorized(err.to_string()));
                }
                AttemptState::Succeeded { model, body } => {
                    return Ok(self.interpret(request, model, &body));
                }
                AttemptState::ExhaustedFallback => {
                    warn!("No model produced output; using fallback learning path");
                    return Ok(fallback(request, MSG_ALL_MODELS_FAILED));
                }
            };
        }
    }

    fn interpret(&self, request: &PathRequest, model: String, body: &str) -> GeneratedPath {
        let output = InferenceOutput::parse(body);
        let Some(text) = output.text() else {
            warn!("Model {model} returned an unrecognized response shape");
            return fallback(request, MSG_UNEXPECTED_FORMAT);
        };

        match parse_steps(text) {
            Ok(steps) => {
                info!("Model {} produced {} learning steps", model, steps.len());
                GeneratedPath {
                    steps,
                    used_fallback: false,
                    message: None,
                    model: Some(model),
                }
            }
            Err(StepsError::NoSteps) => {
                warn!("Model {model} output held no step list");
                fallback(request, MSG_UNPARSABLE_STEPS)
            }
            Err(StepsError::Malformed) => {
                warn!("Model {model} output held a step list that failed to parse");
                fallback(request, MSG_MALFORMED_STEPS)
            }
        }
    }
}

fn fallback(request: &PathRequest, message: &str) -> GeneratedPath {
    GeneratedPath {
        steps: fallback_path(request),
        used_fallback: true,
        message: Some(message.to_string()),
        model: None,
    }
}
