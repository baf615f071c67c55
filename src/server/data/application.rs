use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection};

use crate::server::{
    data::collection::CollectionRepository,
    error::AppError,
    model::{
        application::{Application, ApplicationPatch, CreateApplicationParams},
        Page,
    },
    patch::ChangeSet,
    query::Filters,
    schema::Collection,
};

use entity::application::{Column, Entity};

impl Collection for Entity {
    const NAME: &'static str = "Application";
    const ID: Column = Column::Id;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const DELETED_AT: Option<Column> = Some(Column::DeletedAt);
    const SORT: Column = Column::AppliedAt;
    const STATUS: Option<Column> = Some(Column::Status);
}

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
    collection: CollectionRepository<'a, Entity>,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            collection: CollectionRepository::new(db),
        }
    }

    /// Creates a new application, stamping `applied_at` with the current time.
    pub async fn create(&self, params: CreateApplicationParams) -> Result<Application, AppError> {
        let now = Utc::now();
        let entity = entity::application::ActiveModel {
            job_id: ActiveValue::Set(params.job_id),
            candidat_id: ActiveValue::Set(params.candidat_id),
            cv_url: ActiveValue::Set(params.cv_url),
            cover_letter: ActiveValue::Set(params.cover_letter),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            applied_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Application::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Application>, AppError> {
        self.collection
            .find_by_id(id)
            .await?
            .map(Application::from_entity)
            .transpose()
    }

    /// Finds the active application of a candidate to a job.
    pub async fn find_by_pair(
        &self,
        job_id: i32,
        candidat_id: i32,
    ) -> Result<Option<Application>, AppError> {
        let condition = Condition::all()
            .add(Column::JobId.eq(job_id))
            .add(Column::CandidatId.eq(candidat_id));

        self.collection
            .find_one(condition)
            .await?
            .map(Application::from_entity)
            .transpose()
    }

    /// Gets a page of applications, most recent first, optionally for one job or candidate.
    pub async fn find_page(
        &self,
        filters: &Filters,
        job_id: Option<i32>,
        candidat_id: Option<i32>,
    ) -> Result<Page<Application>, AppError> {
        let mut condition = filters.condition::<Entity>()?;
        if let Some(job_id) = job_id {
            condition = condition.add(Column::JobId.eq(job_id));
        }
        if let Some(candidat_id) = candidat_id {
            condition = condition.add(Column::CandidatId.eq(candidat_id));
        }

        let (applications, total) = self.collection.find_page(condition, filters).await?;

        Ok(Page {
            total,
            results: applications
                .into_iter()
                .map(Application::from_entity)
                .collect::<Result<_, _>>()?,
        })
    }

    pub async fn patch(
        &self,
        id: i32,
        patch: &ApplicationPatch,
        changes: &ChangeSet,
    ) -> Result<u64, AppError> {
        Ok(self.collection.patch(id, patch, changes).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.collection.delete(id).await?)
    }
}
