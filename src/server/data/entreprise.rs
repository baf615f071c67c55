use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection};

use crate::server::{
    data::collection::CollectionRepository,
    error::AppError,
    model::{
        entreprise::{CreateEntrepriseParams, Entreprise, EntreprisePatch},
        Page,
    },
    patch::ChangeSet,
    query::Filters,
    schema::Collection,
};

use entity::entreprise::{Column, Entity};

impl Collection for Entity {
    const NAME: &'static str = "Entreprise";
    const ID: Column = Column::Id;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const DELETED_AT: Option<Column> = None;
    const SORT: Column = Column::CreatedAt;
}

pub struct EntrepriseRepository<'a> {
    db: &'a DatabaseConnection,
    collection: CollectionRepository<'a, Entity>,
}

impl<'a> EntrepriseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            collection: CollectionRepository::new(db),
        }
    }

    /// Creates a new entreprise
    pub async fn create(&self, params: CreateEntrepriseParams) -> Result<Entreprise, AppError> {
        let now = Utc::now();
        let entity = entity::entreprise::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            logo: ActiveValue::Set(params.logo),
            website: ActiveValue::Set(params.website),
            location: ActiveValue::Set(params.location),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Entreprise::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Entreprise>, AppError> {
        Ok(self
            .collection
            .find_by_id(id)
            .await?
            .map(Entreprise::from_entity))
    }

    /// Finds an entreprise by exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Entreprise>, AppError> {
        Ok(self
            .collection
            .find_one(Condition::all().add(Column::Name.eq(name)))
            .await?
            .map(Entreprise::from_entity))
    }

    /// Checks whether an entreprise other than `exclude_id` already uses `name`.
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, AppError> {
        let mut condition = Condition::all().add(Column::Name.eq(name));
        if let Some(id) = exclude_id {
            condition = condition.add(Column::Id.ne(id));
        }

        Ok(self.collection.exists(condition).await?)
    }

    pub async fn find_page(&self, filters: &Filters) -> Result<Page<Entreprise>, AppError> {
        let condition = filters.condition::<Entity>()?;
        let (entreprises, total) = self.collection.find_page(condition, filters).await?;

        Ok(Page {
            total,
            results: entreprises.into_iter().map(Entreprise::from_entity).collect(),
        })
    }

    pub async fn patch(
        &self,
        id: i32,
        patch: &EntreprisePatch,
        changes: &ChangeSet,
    ) -> Result<u64, AppError> {
        Ok(self.collection.patch(id, patch, changes).await?)
    }

    /// Permanently deletes an entreprise. Jobs and emplois referencing it are kept.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.collection.delete(id).await?)
    }
}
