//! User profile collected by the assessment questionnaire.
//!
//! Profiles are transient: they live in a [`crate::session::Session`] for as long as
//! the client keeps it, and are never persisted.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::careers::CareerMatch;
use crate::errors::AppError;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

/// Holland Code interest categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiasecCategory {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Self-reported, 1–5.
    pub proficiency: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestArea {
    pub category: RiasecCategory,
    /// 1–5.
    pub score: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_expectation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_preferences: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub technical: Vec<Skill>,
    #[serde(default)]
    pub soft: Vec<Skill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub interests: Vec<InterestArea>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Goals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_matches: Option<Vec<CareerMatch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_assessment_date: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Technical skills followed by soft skills.
    pub fn all_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.technical.iter().chain(self.skills.soft.iter())
    }

    /// The score for `category`, or 0 when the user has not rated it.
    pub fn interest_score(&self, category: RiasecCategory) -> u8 {
        self.interests
            .iter()
            .find(|i| i.category == category)
            .map(|i| i.score)
            .unwrap_or(0)
    }

    /// Rejects profiles the questionnaire could never produce.
    pub fn validate(&self) -> Result<(), AppError> {
        for skill in self.all_skills() {
            if skill.name.trim().is_empty() {
                return Err(AppError::Validation(
                    "skill names cannot be empty".to_string(),
                ));
            }
            if !(MIN_LEVEL..=MAX_LEVEL).contains(&skill.proficiency) {
                return Err(AppError::Validation(format!(
                    "proficiency for '{}' must be between {MIN_LEVEL} and {MAX_LEVEL}, got {}",
                    skill.name, skill.proficiency
                )));
            }
        }

        let mut seen = HashSet::new();
        for interest in &self.interests {
            if !(MIN_LEVEL..=MAX_LEVEL).contains(&interest.score) {
                return Err(AppError::Validation(format!(
                    "interest score for {:?} must be between {MIN_LEVEL} and {MAX_LEVEL}, got {}",
                    interest.category, interest.score
                )));
            }
            if !seen.insert(interest.category) {
                return Err(AppError::Validation(format!(
                    "interest category {:?} appears more than once",
                    interest.category
                )));
            }
        }

        Ok(())
    }

    /// The profile the questionnaire opens with before the user edits anything.
    pub fn starter() -> Self {
        let skill = |name: &str, proficiency: u8, years: f32| Skill {
            name: name.to_string(),
            proficiency,
            years_experience: Some(years),
        };

        UserProfile {
            personal_info: PersonalInfo {
                name: "Alex Johnson".to_string(),
                email: "alex.johnson@example.com".to_string(),
                age: Some(24),
                education: Some("Bachelor's in Computer Science".to_string()),
                location: Some("San Francisco, CA".to_string()),
            },
            skills: SkillSet {
                technical: vec![
                    skill("JavaScript", 3, 2.0),
                    skill("Python", 2, 1.0),
                    skill("React", 3, 2.0),
                ],
                soft: vec![
                    skill("Communication", 4, 3.0),
                    skill("Problem Solving", 4, 3.0),
                    skill("Teamwork", 4, 3.0),
                ],
            },
            interests: vec![
                InterestArea {
                    category: RiasecCategory::Investigative,
                    score: 4,
                },
                InterestArea {
                    category: RiasecCategory::Artistic,
                    score: 3,
                },
                InterestArea {
                    category: RiasecCategory::Conventional,
                    score: 2,
                },
            ],
            goals: Some(Goals {
                short_term: Some("Become a full-stack developer".to_string()),
                long_term: Some("Lead a technical team in a startup".to_string()),
                salary_expectation: Some("$80,000 - $100,000".to_string()),
            }),
            preferences: Some(Preferences {
                work_environment: Some("Hybrid".to_string()),
                company_size: Some("Startup (1-50)".to_string()),
                salary_range: Some("80000-100000".to_string()),
                industry_preferences: None,
            }),
            career_matches: Some(vec![]),
            last_assessment_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_starter_profile_is_valid() {
        assert!(UserProfile::starter().validate().is_ok());
    }

    #[test]
    fn test_interest_score_defaults_to_zero() {
        let profile = UserProfile::default();
        assert_eq!(profile.interest_score(RiasecCategory::Investigative), 0);
    }

    #[test]
    fn test_interest_score_lookup() {
        let profile = UserProfile::starter();
        assert_eq!(profile.interest_score(RiasecCategory::Investigative), 4);
        assert_eq!(profile.interest_score(RiasecCategory::Social), 0);
    }

    #[test]
    fn test_all_skills_lists_technical_before_soft() {
        let profile = UserProfile::starter();
        let names: Vec<&str> = profile.all_skills().map(|s| s.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"JavaScript"));
        assert_eq!(names.last(), Some(&"Teamwork"));
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_proficiency_out_of_range_rejected() {
        let mut profile = UserProfile::starter();
        profile.skills.technical[0].proficiency = 6;
        assert!(matches!(profile.validate(), Err(AppError::Validation(_))));

        profile.skills.technical[0].proficiency = 0;
        assert!(matches!(profile.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_duplicate_interest_category_rejected() {
        let mut profile = UserProfile::starter();
        profile.interests.push(InterestArea {
            category: RiasecCategory::Investigative,
            score: 1,
        });
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_blank_skill_name_rejected() {
        let mut profile = UserProfile::starter();
        profile.skills.soft[0].name = "  ".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_deserializes_camel_case_questionnaire_payload() {
        let payload = json!({
            "personalInfo": { "name": "Sam", "email": "sam@example.com" },
            "skills": {
                "technical": [{ "name": "Rust", "proficiency": 4, "yearsExperience": 2.5 }],
                "soft": []
            },
            "interests": [{ "category": "Realistic", "score": 3 }]
        });
        let profile: UserProfile = serde_json::from_value(payload).unwrap();
        assert_eq!(profile.skills.technical[0].years_experience, Some(2.5));
        assert_eq!(profile.interests[0].category, RiasecCategory::Realistic);
        assert!(profile.goals.is_none());
    }

    #[test]
    fn test_unknown_interest_category_fails_deserialization() {
        let payload = json!({
            "personalInfo": { "name": "Sam", "email": "sam@example.com" },
            "interests": [{ "category": "Mystic", "score": 3 }]
        });
        let result: Result<UserProfile, _> = serde_json::from_value(payload);
        assert!(result.is_err());
    }
}
