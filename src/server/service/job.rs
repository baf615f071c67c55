use sea_orm::DatabaseConnection;

use crate::server::{
    data::job::JobRepository,
    error::AppError,
    model::{
        job::{CreateJobParams, Job, JobPatch},
        Page,
    },
    patch::{ensure_not_empty, ChangeSet, PatchOutcome},
    query::Filters,
};

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateJobParams) -> Result<Job, AppError> {
        params.validate()?;

        JobRepository::new(self.db).create(params).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Job, AppError> {
        JobRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Lists jobs, optionally only those of one entreprise.
    pub async fn list(
        &self,
        filters: &Filters,
        entreprise_id: Option<i32>,
    ) -> Result<Page<Job>, AppError> {
        JobRepository::new(self.db)
            .find_page(filters, entreprise_id)
            .await
    }

    pub async fn update(&self, id: i32, patch: JobPatch) -> Result<PatchOutcome<Job>, AppError> {
        let repo = JobRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        patch.validate()?;
        ensure_not_empty(&patch)?;

        let changes = ChangeSet::detect(&existing, &patch)?;
        if changes.is_empty() {
            tracing::debug!(id, "job patch is a no-op");
            return Ok(PatchOutcome::Unchanged);
        }

        repo.patch(id, &patch, &changes).await?;

        let updated = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        Ok(PatchOutcome::Updated(updated))
    }

    /// Permanently deletes a job.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !JobRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!(id, "job deleted");

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Job not found".to_string())
}
