//! In-memory assessment sessions.
//!
//! A session owns one transient `UserProfile` from creation until the client discards
//! it. Nothing is persisted; restarting the process drops every session.
//!
//! Only [`SessionStore::assess`] writes `careerMatches` and `lastAssessmentDate`;
//! values a client sends for them are dropped.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::careers::MatchScorer;
use crate::errors::AppError;
use crate::models::profile::UserProfile;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub profile: UserProfile,
    pub assessment_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cloneable handle to the session map shared through `AppState`.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, profile: UserProfile) -> Session {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            profile: UserProfile {
                career_matches: None,
                last_assessment_date: None,
                ..profile
            },
            assessment_completed: false,
            created_at: now,
            updated_at: now,
        };

        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        info!("Created session {}", session.id);
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Replaces the profile. Matches from the last assessment are kept until the next one.
    pub async fn update_profile(
        &self,
        id: Uuid,
        profile: UserProfile,
    ) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;

        session.profile = UserProfile {
            career_matches: session.profile.career_matches.take(),
            last_assessment_date: session.profile.last_assessment_date,
            ..profile
        };
        session.updated_at = Utc::now();

        Ok(session.clone())
    }

    /// Ranks the session's current profile with `scorer` and stores the matches on it.
    /// The write lock is held throughout, so a concurrent profile update lands either
    /// before the ranking or after the matches are stored.
    pub async fn assess(&self, id: Uuid, scorer: &dyn MatchScorer) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;

        let matches = scorer.rank(&session.profile);
        info!("Assessment for session {} produced {} matches", id, matches.len());

        let now = Utc::now();
        session.profile.career_matches = Some(matches);
        session.profile.last_assessment_date = Some(now);
        session.assessment_completed = true;
        session.updated_at = now;

        Ok(session.clone())
    }

    pub async fn discard(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| info!("Discarded session {id}"))
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::careers::catalog::career_catalog;
    use crate::careers::{CareerMatch, SkillOverlapScorer};

    #[tokio::test]
    async fn test_create_then_get() {
        let store = SessionStore::new();
        let session = store.create(UserProfile::starter()).await;

        let fetched = store.get(session.id).await.unwrap();
        assert_eq!(fetched.id, session.id);
        assert!(!fetched.assessment_completed);
        assert_eq!(fetched.profile.personal_info.name, "Alex Johnson");
    }

    #[tokio::test]
    async fn test_unknown_session_not_found() {
        let store = SessionStore::new();
        let result = store.get(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_profile_replaces_profile() {
        let store = SessionStore::new();
        let session = store.create(UserProfile::starter()).await;

        let mut profile = UserProfile::starter();
        profile.personal_info.name = "Jordan".to_string();
        let updated = store.update_profile(session.id, profile).await.unwrap();

        assert_eq!(updated.profile.personal_info.name, "Jordan");
        assert!(updated.updated_at >= session.updated_at);
    }

    fn injected_matches() -> Vec<CareerMatch> {
        vec![CareerMatch::from_entry(&career_catalog()[0], 0.01)]
    }

    #[tokio::test]
    async fn test_assess_completes_assessment() {
        let store = SessionStore::new();
        let session = store.create(UserProfile::starter()).await;

        let updated = store
            .assess(session.id, &SkillOverlapScorer::default())
            .await
            .unwrap();

        assert!(updated.assessment_completed);
        assert_eq!(
            updated.profile.career_matches.as_ref().map(Vec::len),
            Some(career_catalog().len())
        );
        assert!(updated.profile.last_assessment_date.is_some());
    }

    #[tokio::test]
    async fn test_assess_ranks_latest_profile() {
        let store = SessionStore::new();
        let session = store.create(UserProfile::default()).await;

        let mut profile = UserProfile::default();
        profile.skills.technical = UserProfile::starter().skills.technical;
        store.update_profile(session.id, profile).await.unwrap();

        let updated = store
            .assess(session.id, &SkillOverlapScorer::default())
            .await
            .unwrap();
        let top = &updated.profile.career_matches.as_ref().unwrap()[0];
        assert!(top.match_score > 0.4);
    }

    #[tokio::test]
    async fn test_assess_unknown_session_not_found() {
        let store = SessionStore::new();
        let result = store
            .assess(Uuid::new_v4(), &SkillOverlapScorer::default())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_previous_matches() {
        let store = SessionStore::new();
        let session = store.create(UserProfile::default()).await;
        store
            .assess(session.id, &SkillOverlapScorer::default())
            .await
            .unwrap();

        let updated = store
            .update_profile(session.id, UserProfile::default())
            .await
            .unwrap();

        assert_eq!(
            updated.profile.career_matches.as_ref().map(Vec::len),
            Some(career_catalog().len())
        );
    }

    #[tokio::test]
    async fn test_create_drops_client_assessment_fields() {
        let store = SessionStore::new();
        let profile = UserProfile {
            career_matches: Some(injected_matches()),
            last_assessment_date: Some(Utc::now()),
            ..UserProfile::starter()
        };

        let session = store.create(profile).await;

        assert!(session.profile.career_matches.is_none());
        assert!(session.profile.last_assessment_date.is_none());
    }

    #[tokio::test]
    async fn test_update_ignores_client_assessment_fields() {
        let store = SessionStore::new();
        let session = store.create(UserProfile::starter()).await;

        let profile = UserProfile {
            career_matches: Some(injected_matches()),
            last_assessment_date: Some(Utc::now()),
            ..UserProfile::starter()
        };
        let updated = store.update_profile(session.id, profile).await.unwrap();

        assert!(updated.profile.career_matches.is_none());
        assert!(updated.profile.last_assessment_date.is_none());
    }

    #[tokio::test]
    async fn test_discard_removes_session() {
        let store = SessionStore::new();
        let session = store.create(UserProfile::starter()).await;

        store.discard(session.id).await.unwrap();

        assert!(store.get(session.id).await.is_err());
        assert!(store.discard(session.id).await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_sessions() {
        let store = SessionStore::new();
        let handle = store.clone();
        let session = store.create(UserProfile::starter()).await;
        assert!(handle.get(session.id).await.is_ok());
    }
}
