//! Local learning path template, used whenever the inference service gives us nothing usable.
//! Pure and infallible: always 2 to 5 steps, numbered from 1.

use crate::learning_path::{GeneratedLearningStep, PathRequest};

pub fn fallback_path(request: &PathRequest) -> Vec<GeneratedLearningStep> {
    let mut drafts: Vec<(String, String, &str)> = Vec::with_capacity(5);

    if let Some(weakness) = request.weaknesses.first() {
        drafts.push((
            format!("Master {weakness}"),
            format!("Focus on building fundamental knowledge in {weakness}."),
            "2-3 weeks",
        ));
    }

    if let Some(skill) = request.skills.first() {
        drafts.push((
            format!("Advanced {skill}"),
            format!("Take your {skill} skills to the next level."),
            "3-4 weeks",
        ));
    }

    if let Some(interest) = request.interests.first() {
        drafts.push((
            format!("Deep Dive into {interest}"),
            format!("Explore advanced topics in {interest} and work on projects."),
            "4-5 weeks",
        ));
    }

    drafts.push((
        "Integration Project".to_string(),
        "Combine all skills and interests to work on a comprehensive project.".to_string(),
        "2-3 weeks",
    ));
    drafts.push((
        "Portfolio Development".to_string(),
        "Create a professional portfolio showcasing your projects and skills.".to_string(),
        "1-2 weeks",
    ));

    drafts
        .into_iter()
        .zip(1..)
        .map(|((title, description, duration), step)| GeneratedLearningStep {
            step,
            title,
            description,
            duration: duration.to_string(),
        })
        .collect()
}
