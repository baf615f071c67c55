use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection};

use crate::server::{
    data::collection::CollectionRepository,
    error::AppError,
    model::{
        candidat::{Candidat, CandidatPatch, CreateCandidatParams},
        Page,
    },
    patch::ChangeSet,
    query::Filters,
    schema::Collection,
};

use entity::candidat::{Column, Entity};

impl Collection for Entity {
    const NAME: &'static str = "Candidat";
    const ID: Column = Column::Id;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const DELETED_AT: Option<Column> = Some(Column::DeletedAt);
    const SORT: Column = Column::CreatedAt;
}

pub struct CandidatRepository<'a> {
    db: &'a DatabaseConnection,
    collection: CollectionRepository<'a, Entity>,
}

impl<'a> CandidatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            collection: CollectionRepository::new(db),
        }
    }

    /// Creates a new candidate profile
    pub async fn create(&self, params: CreateCandidatParams) -> Result<Candidat, AppError> {
        let now = Utc::now();
        let entity = entity::candidat::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            cv_url: ActiveValue::Set(params.cv_url),
            skills: ActiveValue::Set(serde_json::json!(params.skills)),
            experience: ActiveValue::Set(params.experience),
            education: ActiveValue::Set(params.education),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Candidat::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Candidat>, AppError> {
        self.collection
            .find_by_id(id)
            .await?
            .map(Candidat::from_entity)
            .transpose()
    }

    /// Finds the active candidate profile of a user.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Candidat>, AppError> {
        self.collection
            .find_one(Condition::all().add(Column::UserId.eq(user_id)))
            .await?
            .map(Candidat::from_entity)
            .transpose()
    }

    pub async fn find_page(&self, filters: &Filters) -> Result<Page<Candidat>, AppError> {
        let condition = filters.condition::<Entity>()?;
        let (candidats, total) = self.collection.find_page(condition, filters).await?;

        Ok(Page {
            total,
            results: candidats
                .into_iter()
                .map(Candidat::from_entity)
                .collect::<Result<_, _>>()?,
        })
    }

    pub async fn patch(
        &self,
        id: i32,
        patch: &CandidatPatch,
        changes: &ChangeSet,
    ) -> Result<u64, AppError> {
        Ok(self.collection.patch(id, patch, changes).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.collection.delete(id).await?)
    }
}
