//! Job factory for creating test job offers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test jobs.
pub struct JobFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    location: String,
    contract_type: String,
    remote: bool,
    entreprise_id: i32,
    created_by: i32,
    status: String,
}

impl<'a> JobFactory<'a> {
    /// Creates a new JobFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Job {id}"`
    /// - contract_type: `"CDI"`
    /// - status: `"draft"`
    pub fn new(db: &'a DatabaseConnection, entreprise_id: i32, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Job {}", id),
            location: "Lyon".to_string(),
            contract_type: "CDI".to_string(),
            remote: false,
            entreprise_id,
            created_by,
            status: "draft".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the job entity into the database.
    pub async fn build(self) -> Result<entity::job::Model, DbErr> {
        let now = Utc::now();
        entity::job::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("A test job offer".to_string()),
            location: ActiveValue::Set(self.location),
            contract_type: ActiveValue::Set(self.contract_type),
            remote: ActiveValue::Set(self.remote),
            salary_range: ActiveValue::Set(None),
            entreprise_id: ActiveValue::Set(self.entreprise_id),
            created_by: ActiveValue::Set(self.created_by),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft job for the given entreprise and author.
pub async fn create_job(
    db: &DatabaseConnection,
    entreprise_id: i32,
    created_by: i32,
) -> Result<entity::job::Model, DbErr> {
    JobFactory::new(db, entreprise_id, created_by).build().await
}
