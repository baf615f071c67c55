use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection};

use crate::server::{
    data::collection::CollectionRepository,
    error::AppError,
    model::{
        job::{CreateJobParams, Job, JobPatch},
        Page,
    },
    patch::ChangeSet,
    query::Filters,
    schema::Collection,
};

use entity::job::{Column, Entity};

impl Collection for Entity {
    const NAME: &'static str = "Job";
    const ID: Column = Column::Id;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const DELETED_AT: Option<Column> = None;
    const SORT: Column = Column::CreatedAt;
    const STATUS: Option<Column> = Some(Column::Status);
}

pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
    collection: CollectionRepository<'a, Entity>,
}

impl<'a> JobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            collection: CollectionRepository::new(db),
        }
    }

    /// Creates a new job offer
    pub async fn create(&self, params: CreateJobParams) -> Result<Job, AppError> {
        let now = Utc::now();
        let entity = entity::job::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            contract_type: ActiveValue::Set(params.contract_type),
            remote: ActiveValue::Set(params.remote),
            salary_range: ActiveValue::Set(params.salary_range),
            entreprise_id: ActiveValue::Set(params.entreprise_id),
            created_by: ActiveValue::Set(params.created_by),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(params.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Job::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Job>, AppError> {
        self.collection
            .find_by_id(id)
            .await?
            .map(Job::from_entity)
            .transpose()
    }

    /// Gets a page of jobs, optionally restricted to one entreprise.
    pub async fn find_page(
        &self,
        filters: &Filters,
        entreprise_id: Option<i32>,
    ) -> Result<Page<Job>, AppError> {
        let mut condition = filters.condition::<Entity>()?;
        if let Some(entreprise_id) = entreprise_id {
            condition = condition.add(Column::EntrepriseId.eq(entreprise_id));
        }

        let (jobs, total) = self.collection.find_page(condition, filters).await?;

        Ok(Page {
            total,
            results: jobs
                .into_iter()
                .map(Job::from_entity)
                .collect::<Result<_, _>>()?,
        })
    }

    pub async fn patch(&self, id: i32, patch: &JobPatch, changes: &ChangeSet) -> Result<u64, AppError> {
        Ok(self.collection.patch(id, patch, changes).await?)
    }

    /// Permanently deletes a job. Applications referencing it are kept.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.collection.delete(id).await?)
    }
}
