//! Application factory for creating job applications.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applications.
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    job_id: i32,
    candidat_id: i32,
    cover_letter: Option<String>,
    status: String,
    applied_at: DateTime<Utc>,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory for the given job and candidate.
    ///
    /// Defaults:
    /// - status: `"submitted"`
    /// - applied_at: now
    pub fn new(db: &'a DatabaseConnection, job_id: i32, candidat_id: i32) -> Self {
        Self {
            db,
            job_id,
            candidat_id,
            cover_letter: None,
            status: "submitted".to_string(),
            applied_at: Utc::now(),
        }
    }

    pub fn cover_letter(mut self, cover_letter: impl Into<String>) -> Self {
        self.cover_letter = Some(cover_letter.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Overrides the application timestamp, which drives list ordering.
    pub fn applied_at(mut self, applied_at: DateTime<Utc>) -> Self {
        self.applied_at = applied_at;
        self
    }

    /// Builds and inserts the application entity into the database.
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        let now = Utc::now();
        entity::application::ActiveModel {
            job_id: ActiveValue::Set(self.job_id),
            candidat_id: ActiveValue::Set(self.candidat_id),
            cv_url: ActiveValue::Set(None),
            cover_letter: ActiveValue::Set(self.cover_letter),
            status: ActiveValue::Set(self.status),
            applied_at: ActiveValue::Set(self.applied_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a submitted application with default values.
pub async fn create_application(
    db: &DatabaseConnection,
    job_id: i32,
    candidat_id: i32,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db, job_id, candidat_id).build().await
}
