//! Emploi factory for creating user-entreprise employment links.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test emplois.
pub struct EmploiFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    entreprise_id: i32,
    position: String,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> EmploiFactory<'a> {
    /// Creates a new EmploiFactory linking `user_id` to `entreprise_id`.
    ///
    /// Defaults:
    /// - position: `"Developer"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, entreprise_id: i32) -> Self {
        Self {
            db,
            user_id,
            entreprise_id,
            position: "Developer".to_string(),
            deleted_at: None,
        }
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn deleted_at(mut self, deleted_at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }

    /// Builds and inserts the emploi entity into the database.
    pub async fn build(self) -> Result<entity::emploi::Model, DbErr> {
        let now = Utc::now();
        entity::emploi::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            entreprise_id: ActiveValue::Set(self.entreprise_id),
            position: ActiveValue::Set(self.position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active emploi with default values.
pub async fn create_emploi(
    db: &DatabaseConnection,
    user_id: i32,
    entreprise_id: i32,
) -> Result<entity::emploi::Model, DbErr> {
    EmploiFactory::new(db, user_id, entreprise_id).build().await
}
