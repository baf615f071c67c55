use sea_orm::DatabaseConnection;

use crate::server::{
    data::application::ApplicationRepository,
    error::AppError,
    model::{
        application::{Application, ApplicationPatch, CreateApplicationParams},
        Page,
    },
    patch::{ensure_not_empty, ChangeSet, PatchOutcome},
    query::Filters,
};

const DUPLICATE: &str = "Application already exists for this job and candidate";

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a candidate's application to a job; one active application per pair.
    pub async fn create(&self, params: CreateApplicationParams) -> Result<Application, AppError> {
        let repo = ApplicationRepository::new(self.db);

        if repo
            .find_by_pair(params.job_id, params.candidat_id)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(DUPLICATE.to_string()));
        }

        repo.create(params)
            .await
            .map_err(|e| e.conflict_on_unique(DUPLICATE))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Application, AppError> {
        ApplicationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Lists applications, most recent first, optionally for one job and/or candidate.
    pub async fn list(
        &self,
        filters: &Filters,
        job_id: Option<i32>,
        candidat_id: Option<i32>,
    ) -> Result<Page<Application>, AppError> {
        ApplicationRepository::new(self.db)
            .find_page(filters, job_id, candidat_id)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        patch: ApplicationPatch,
    ) -> Result<PatchOutcome<Application>, AppError> {
        let repo = ApplicationRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        ensure_not_empty(&patch)?;

        let changes = ChangeSet::detect(&existing, &patch)?;
        if changes.is_empty() {
            tracing::debug!(id, "application patch is a no-op");
            return Ok(PatchOutcome::Unchanged);
        }

        repo.patch(id, &patch, &changes).await?;

        let updated = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        Ok(PatchOutcome::Updated(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ApplicationRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!(id, "application deleted");

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Application not found".to_string())
}
