//! Career matching: scores every catalog entry against a user profile.
//!
//! Per career:
//! 1. A required skill is covered when some user skill (technical, then soft) contains
//!    it or is contained by it, case-insensitively. The first such user skill counts.
//! 2. skill_score = 0.7 × coverage + 0.3 × (mean proficiency of covering skills / 5)
//! 3. interest_bonus = 0.2 × (Investigative score / 5), applied to every career
//! 4. match_score = max(min(skill_score + interest_bonus, 1.0), 0.4)
//!
//! The 0.4 floor keeps every career presentable and must not be removed.

use serde::Serialize;

use crate::careers::catalog::CatalogEntry;
use crate::careers::CareerMatch;
use crate::models::profile::{RiasecCategory, Skill, UserProfile, MAX_LEVEL};

pub const MAX_MATCHES: usize = 12;
pub const SCORE_FLOOR: f64 = 0.4;
pub const SCORE_CEILING: f64 = 1.0;

const COVERAGE_WEIGHT: f64 = 0.7;
const PROFICIENCY_WEIGHT: f64 = 0.3;
const INTEREST_BONUS_WEIGHT: f64 = 0.2;
const BONUS_CATEGORY: RiasecCategory = RiasecCategory::Investigative;

/// Intermediate values of a single career's score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub matched_skills: Vec<String>,
    pub skill_match_ratio: f64,
    pub avg_proficiency: f64,
    pub skill_score: f64,
    pub interest_bonus: f64,
    pub match_score: f64,
}

/// Ranks `catalog` against `profile`: best first, ties in catalog order, at most
/// [`MAX_MATCHES`] entries.
pub fn rank_careers(profile: &UserProfile, catalog: &[CatalogEntry]) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = catalog
        .iter()
        .map(|entry| {
            let breakdown = score_career(profile, entry.required_skills);
            CareerMatch::from_entry(entry, breakdown.match_score)
        })
        .collect();

    // sort_by is stable, so equal scores keep catalog order
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    matches.truncate(MAX_MATCHES);
    matches
}

pub fn score_career(profile: &UserProfile, required_skills: &[&str]) -> ScoreBreakdown {
    let user_skills: Vec<(String, &Skill)> = profile
        .all_skills()
        .map(|s| (s.name.to_lowercase(), s))
        .collect();

    let mut matched_skills = Vec::new();
    let mut total_proficiency = 0u32;

    for required in required_skills {
        let required_lower = required.to_lowercase();
        let covering = user_skills.iter().find(|(name, _)| {
            name.contains(required_lower.as_str()) || required_lower.contains(name.as_str())
        });

        if let Some((_, skill)) = covering {
            matched_skills.push(required.to_string());
            total_proficiency += u32::from(skill.proficiency);
        }
    }

    let matched = matched_skills.len();
    let skill_match_ratio = if required_skills.is_empty() {
        0.0
    } else {
        matched as f64 / required_skills.len() as f64
    };
    let avg_proficiency = if matched > 0 {
        f64::from(total_proficiency) / matched as f64
    } else {
        0.0
    };
    let max_level = f64::from(MAX_LEVEL);

    let skill_score =
        COVERAGE_WEIGHT * skill_match_ratio + PROFICIENCY_WEIGHT * (avg_proficiency / max_level);
    let interest_bonus =
        INTEREST_BONUS_WEIGHT * (f64::from(profile.interest_score(BONUS_CATEGORY)) / max_level);

    let match_score = (skill_score + interest_bonus).clamp(SCORE_FLOOR, SCORE_CEILING);

    ScoreBreakdown {
        matched_skills,
        skill_match_ratio,
        avg_proficiency,
        skill_score,
        interest_bonus,
        match_score,
    }
}
