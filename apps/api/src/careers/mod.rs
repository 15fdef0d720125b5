//! Career matching: ranks the static career catalog against a user profile.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; the default backend is
//! `SkillOverlapScorer` over the built-in catalog.

pub mod catalog;
pub mod handlers;
pub mod matcher;

use serde::{Deserialize, Serialize};

use crate::careers::catalog::{career_catalog, CatalogEntry};
use crate::models::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerStep {
    pub title: String,
    pub description: String,
    pub timeframe: String,
}

/// A catalog entry annotated with its computed score (0.4 – 1.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    pub title: String,
    pub description: String,
    pub match_score: f64,
    pub salary_range: String,
    pub growth_outlook: String,
    pub demand_level: String,
    pub experience_level: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub career_path: Vec<CareerStep>,
}

impl CareerMatch {
    pub fn from_entry(entry: &CatalogEntry, match_score: f64) -> Self {
        Self {
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            match_score,
            salary_range: entry.salary_range.to_string(),
            growth_outlook: entry.growth_outlook.to_string(),
            demand_level: entry.demand_level.to_string(),
            experience_level: entry.experience_level.to_string(),
            required_skills: entry.required_skills.iter().map(|s| s.to_string()).collect(),
            career_path: entry
                .career_path
                .iter()
                .map(|s| CareerStep {
                    title: s.title.to_string(),
                    description: s.description.to_string(),
                    timeframe: s.timeframe.to_string(),
                })
                .collect(),
        }
    }
}

/// Ranks careers for a profile. Implementations must be pure and must not block.
pub trait MatchScorer: Send + Sync {
    fn rank(&self, profile: &UserProfile) -> Vec<CareerMatch>;
}

/// Skill-overlap scorer over a fixed catalog. See [`matcher`] for the formula.
pub struct SkillOverlapScorer {
    catalog: &'static [CatalogEntry],
}

impl SkillOverlapScorer {
    pub fn new(catalog: &'static [CatalogEntry]) -> Self {
        Self { catalog }
    }
}

impl Default for SkillOverlapScorer {
    fn default() -> Self {
        Self::new(career_catalog())
    }
}

impl MatchScorer for SkillOverlapScorer {
    fn rank(&self, profile: &UserProfile) -> Vec<CareerMatch> {
        matcher::rank_careers(profile, self.catalog)
    }
}
