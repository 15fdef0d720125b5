//! Interpreting inference service output.
//!
//! The service answers either `[{"generated_text": ...}]` or `{"generated_text": ...}`.
//! Anything else is `Unrecognized` and sends the caller to the local template.

use serde::Deserialize;

use crate::learning_path::GeneratedLearningStep;

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutput {
    /// Text from the first element of an array response.
    Batch(String),
    Single(String),
    Unrecognized,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawOutput {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
}

impl InferenceOutput {
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<RawOutput>(body) {
            Ok(RawOutput::Batch(items)) => items
                .into_iter()
                .next()
                .map(|item| InferenceOutput::Batch(item.generated_text))
                .unwrap_or(InferenceOutput::Unrecognized),
            Ok(RawOutput::Single(item)) => InferenceOutput::Single(item.generated_text),
            Err(_) => InferenceOutput::Unrecognized,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            InferenceOutput::Batch(text) | InferenceOutput::Single(text) => Some(text.as_str()),
            InferenceOutput::Unrecognized => None,
        }
    }
}

/// The span from the first `[` to the last `]`, if any.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Why a model's text yielded no learning steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepsError {
    /// No bracketed span, or an empty array.
    NoSteps,
    /// A bracketed span that does not read as a list of steps.
    Malformed,
}

/// Reads learning steps out of free model text. Steps are renumbered 1.. in the order
/// given.
pub fn parse_steps(text: &str) -> Result<Vec<GeneratedLearningStep>, StepsError> {
    let array = extract_json_array(text).ok_or(StepsError::NoSteps)?;
    let mut steps: Vec<GeneratedLearningStep> =
        serde_json::from_str(array).map_err(|_| StepsError::Malformed)?;
    if steps.is_empty() {
        return Err(StepsError::NoSteps);
    }
    for (step, number) in steps.iter_mut().zip(1..) {
        step.step = number;
    }
    Ok(steps)
}
