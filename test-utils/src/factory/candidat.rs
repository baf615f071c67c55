//! Candidat factory for creating candidate profiles.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test candidate profiles.
pub struct CandidatFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    cv_url: Option<String>,
    skills: Vec<String>,
    experience: Option<String>,
}

impl<'a> CandidatFactory<'a> {
    /// Creates a new CandidatFactory for the given user.
    ///
    /// Defaults:
    /// - skills: `["rust", "sql"]`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            cv_url: None,
            skills: vec!["rust".to_string(), "sql".to_string()],
            experience: None,
        }
    }

    pub fn cv_url(mut self, cv_url: impl Into<String>) -> Self {
        self.cv_url = Some(cv_url.into());
        self
    }

    pub fn skills<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    /// Builds and inserts the candidat entity into the database.
    pub async fn build(self) -> Result<entity::candidat::Model, DbErr> {
        let now = Utc::now();
        entity::candidat::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            cv_url: ActiveValue::Set(self.cv_url),
            skills: ActiveValue::Set(json!(self.skills)),
            experience: ActiveValue::Set(self.experience),
            education: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a candidate profile with default values.
pub async fn create_candidat(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::candidat::Model, DbErr> {
    CandidatFactory::new(db, user_id).build().await
}
