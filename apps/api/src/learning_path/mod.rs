// Learning path generation.
// The gateway asks the inference service for a plan and degrades to the local
// template whenever the service is unusable. All outbound calls go through llm_client.

pub mod fallback;
pub mod gateway;
pub mod handlers;
pub mod prompts;
pub mod response;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// One step of a learning plan. Both the model output and the local template use this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedLearningStep {
    /// 1-based. Model output is renumbered, so a missing value is tolerated.
    #[serde(default)]
    pub step: u32,
    pub title: String,
    pub description: String,
    /// Free text, e.g. "2-3 weeks".
    #[serde(deserialize_with = "duration_text")]
    pub duration: String,
}

/// Models sometimes answer `"duration": 3` instead of a string; that means weeks.
fn duration_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(format!("{n} weeks")),
        other => Err(serde::de::Error::custom(format!(
            "duration must be a string or number, got {other}"
        ))),
    }
}

/// Result of a generation request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPath {
    #[serde(rename = "learningPath")]
    pub steps: Vec<GeneratedLearningStep>,
    pub used_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Model that produced the steps. `None` for the local template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Validated input for the gateway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathRequest {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub weaknesses: Vec<String>,
}

const REQUIRED_FIELDS: [&str; 3] = ["skills", "interests", "weaknesses"];

impl PathRequest {
    /// Validates a raw request body: all three fields present, each an array of strings.
    pub fn from_value(body: &Value) -> Result<Self, AppError> {
        if REQUIRED_FIELDS
            .iter()
            .any(|name| present_field(body, name).is_none())
        {
            return Err(AppError::Validation(
                "Missing required fields: skills, interests, weaknesses".to_string(),
            ));
        }

        Ok(Self {
            skills: string_list(body, "skills")?,
            interests: string_list(body, "interests")?,
            weaknesses: string_list(body, "weaknesses")?,
        })
    }
}

fn present_field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    body.get(name).filter(|v| !v.is_null())
}

fn string_list(body: &Value, name: &str) -> Result<Vec<String>, AppError> {
    let items = present_field(body, name)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::Validation("skills, interests, and weaknesses must be arrays".to_string())
        })?;

    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<String>>>()
        .ok_or_else(|| AppError::Validation(format!("{name} must contain only strings")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_request_parses() {
        let body = json!({
            "skills": ["JavaScript", "React"],
            "interests": ["Web Development"],
            "weaknesses": ["Database Design"]
        });
        let request = PathRequest::from_value(&body).unwrap();
        assert_eq!(request.skills, vec!["JavaScript", "React"]);
        assert_eq!(request.interests, vec!["Web Development"]);
        assert_eq!(request.weaknesses, vec!["Database Design"]);
    }

    #[test]
    fn test_empty_arrays_are_valid() {
        let body = json!({ "skills": [], "interests": [], "weaknesses": [] });
        assert_eq!(PathRequest::from_value(&body).unwrap(), PathRequest::default());
    }

    #[test]
    fn test_missing_field_rejected() {
        let body = json!({ "skills": [], "interests": [] });
        let err = PathRequest::from_value(&body).unwrap_err();
        assert!(err.to_string().contains("Missing required fields"));
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let body = json!({ "skills": [], "interests": null, "weaknesses": [] });
        let err = PathRequest::from_value(&body).unwrap_err();
        assert!(err.to_string().contains("Missing required fields"));
    }

    #[test]
    fn test_non_array_field_rejected() {
        let body = json!({ "skills": "Python", "interests": [], "weaknesses": [] });
        let err = PathRequest::from_value(&body).unwrap_err();
        assert!(err.to_string().contains("must be arrays"));
    }

    #[test]
    fn test_non_string_element_rejected() {
        let body = json!({ "skills": [1, 2], "interests": [], "weaknesses": [] });
        let err = PathRequest::from_value(&body).unwrap_err();
        assert!(err.to_string().contains("skills must contain only strings"));
    }

    #[test]
    fn test_numeric_duration_read_as_weeks() {
        let step: GeneratedLearningStep = serde_json::from_value(json!({
            "step": 1, "title": "Rust", "description": "Learn Rust", "duration": 3
        }))
        .unwrap();
        assert_eq!(step.duration, "3 weeks");
    }

    #[test]
    fn test_generated_path_wire_shape() {
        let path = GeneratedPath {
            steps: vec![],
            used_fallback: true,
            message: Some("fallback".to_string()),
            model: None,
        };
        let value = serde_json::to_value(&path).unwrap();
        assert!(value["learningPath"].is_array());
        assert_eq!(value["usedFallback"], true);
        assert_eq!(value["message"], "fallback");
        assert!(value.get("model").is_none());
    }
}
