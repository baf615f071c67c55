use sea_orm::DatabaseConnection;

use crate::server::{
    data::candidat::CandidatRepository,
    error::AppError,
    model::{
        candidat::{Candidat, CandidatPatch, CreateCandidatParams},
        Page,
    },
    patch::{ensure_not_empty, ChangeSet, PatchOutcome},
    query::Filters,
};

const DUPLICATE: &str = "This user already has a candidat profile";

pub struct CandidatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CandidatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the candidate profile of a user; one active profile per user.
    pub async fn create(&self, params: CreateCandidatParams) -> Result<Candidat, AppError> {
        let repo = CandidatRepository::new(self.db);

        if repo.find_by_user_id(params.user_id).await?.is_some() {
            return Err(AppError::AlreadyExists(DUPLICATE.to_string()));
        }

        repo.create(params)
            .await
            .map_err(|e| e.conflict_on_unique(DUPLICATE))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Candidat, AppError> {
        CandidatRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Candidat, AppError> {
        CandidatRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn list(&self, filters: &Filters) -> Result<Page<Candidat>, AppError> {
        CandidatRepository::new(self.db).find_page(filters).await
    }

    pub async fn update(
        &self,
        id: i32,
        patch: CandidatPatch,
    ) -> Result<PatchOutcome<Candidat>, AppError> {
        let repo = CandidatRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        ensure_not_empty(&patch)?;

        let changes = ChangeSet::detect(&existing, &patch)?;
        if changes.is_empty() {
            tracing::debug!(id, "candidat patch is a no-op");
            return Ok(PatchOutcome::Unchanged);
        }

        repo.patch(id, &patch, &changes).await?;

        let updated = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        Ok(PatchOutcome::Updated(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CandidatRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!(id, "candidat deleted");

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Candidat not found".to_string())
}
