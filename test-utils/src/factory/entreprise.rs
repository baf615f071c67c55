//! Entreprise factory for creating test entreprise entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test entreprises.
pub struct EntrepriseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    location: Option<String>,
    created_by: i32,
}

impl<'a> EntrepriseFactory<'a> {
    /// Creates a new EntrepriseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Entreprise {id}"`
    /// - location: `"Paris"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `created_by` - Id of the owning user
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Entreprise {}", id),
            description: None,
            location: Some("Paris".to_string()),
            created_by,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Builds and inserts the entreprise entity into the database.
    pub async fn build(self) -> Result<entity::entreprise::Model, DbErr> {
        let now = Utc::now();
        entity::entreprise::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            logo: ActiveValue::Set(None),
            website: ActiveValue::Set(None),
            location: ActiveValue::Set(self.location),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an entreprise with default values owned by `created_by`.
pub async fn create_entreprise(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::entreprise::Model, DbErr> {
    EntrepriseFactory::new(db, created_by).build().await
}
