use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection};

use crate::server::{
    data::collection::CollectionRepository,
    error::AppError,
    model::{
        emploi::{CreateEmploiParams, Emploi, EmploiPatch},
        Page,
    },
    patch::ChangeSet,
    query::Filters,
    schema::Collection,
};

use entity::emploi::{Column, Entity};

impl Collection for Entity {
    const NAME: &'static str = "Emploi";
    const ID: Column = Column::Id;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const DELETED_AT: Option<Column> = Some(Column::DeletedAt);
    const SORT: Column = Column::CreatedAt;
}

pub struct EmploiRepository<'a> {
    db: &'a DatabaseConnection,
    collection: CollectionRepository<'a, Entity>,
}

impl<'a> EmploiRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            collection: CollectionRepository::new(db),
        }
    }

    /// Creates a new employment link
    pub async fn create(&self, params: CreateEmploiParams) -> Result<Emploi, AppError> {
        let now = Utc::now();
        let entity = entity::emploi::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            entreprise_id: ActiveValue::Set(params.entreprise_id),
            position: ActiveValue::Set(params.position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Emploi::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Emploi>, AppError> {
        Ok(self.collection.find_by_id(id).await?.map(Emploi::from_entity))
    }

    /// Finds the active link between a user and an entreprise.
    pub async fn find_by_pair(
        &self,
        user_id: i32,
        entreprise_id: i32,
    ) -> Result<Option<Emploi>, AppError> {
        let condition = Condition::all()
            .add(Column::UserId.eq(user_id))
            .add(Column::EntrepriseId.eq(entreprise_id));

        Ok(self
            .collection
            .find_one(condition)
            .await?
            .map(Emploi::from_entity))
    }

    /// Gets a page of active links, optionally restricted to a user or an entreprise.
    pub async fn find_page(
        &self,
        filters: &Filters,
        user_id: Option<i32>,
        entreprise_id: Option<i32>,
    ) -> Result<Page<Emploi>, AppError> {
        let mut condition = filters.condition::<Entity>()?;
        if let Some(user_id) = user_id {
            condition = condition.add(Column::UserId.eq(user_id));
        }
        if let Some(entreprise_id) = entreprise_id {
            condition = condition.add(Column::EntrepriseId.eq(entreprise_id));
        }

        let (emplois, total) = self.collection.find_page(condition, filters).await?;

        Ok(Page {
            total,
            results: emplois.into_iter().map(Emploi::from_entity).collect(),
        })
    }

    pub async fn patch(
        &self,
        id: i32,
        patch: &EmploiPatch,
        changes: &ChangeSet,
    ) -> Result<u64, AppError> {
        Ok(self.collection.patch(id, patch, changes).await?)
    }

    /// Soft-deletes an employment link, freeing the pair for a new one.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.collection.delete(id).await?)
    }
}
