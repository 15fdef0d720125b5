// Prompt constants for learning path generation.

use crate::learning_path::PathRequest;

/// Learning path prompt. Replace `{skills}`, `{interests}` and `{weaknesses}` before sending.
pub const LEARNING_PATH_PROMPT_TEMPLATE: &str = r#"Generate a personalized learning path with 4-6 steps based on the following information:

Skills: {skills}
Interests: {interests}
Weaknesses: {weaknesses}

Each step should include: step number, title, description, and estimated duration in weeks. Return it strictly as JSON in the format:
[
  { "step": 1, "title": "...", "description": "...", "duration": "..." },
  { "step": 2, "title": "...", "description": "...", "duration": "..." },
  ...
]

Make the learning path practical, progressive, and tailored to help the user develop their skills while addressing their weaknesses and aligning with their interests."#;

pub fn build_learning_path_prompt(request: &PathRequest) -> String {
    LEARNING_PATH_PROMPT_TEMPLATE
        .replace("{skills}", &request.skills.join(", "))
        .replace("{interests}", &request.interests.join(", "))
        .replace("{weaknesses}", &request.weaknesses.join(", "))
}
