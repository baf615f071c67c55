use sea_orm::DatabaseConnection;

use crate::server::{
    data::emploi::EmploiRepository,
    error::AppError,
    model::{
        emploi::{CreateEmploiParams, Emploi, EmploiPatch},
        Page,
    },
    patch::{ensure_not_empty, ChangeSet, PatchOutcome},
    query::Filters,
};

const DUPLICATE: &str = "This user already has an emploi at this entreprise";

pub struct EmploiService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmploiService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a user to an entreprise.
    ///
    /// # Returns
    /// - `Err(AppError::AlreadyExists)` - An active link for the pair already exists
    pub async fn create(&self, params: CreateEmploiParams) -> Result<Emploi, AppError> {
        params.validate()?;

        let repo = EmploiRepository::new(self.db);

        if repo
            .find_by_pair(params.user_id, params.entreprise_id)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(DUPLICATE.to_string()));
        }

        repo.create(params)
            .await
            .map_err(|e| e.conflict_on_unique(DUPLICATE))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Emploi, AppError> {
        EmploiRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// The active link between a user and an entreprise.
    pub async fn get_by_pair(&self, user_id: i32, entreprise_id: i32) -> Result<Emploi, AppError> {
        EmploiRepository::new(self.db)
            .find_by_pair(user_id, entreprise_id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn list(
        &self,
        filters: &Filters,
        user_id: Option<i32>,
        entreprise_id: Option<i32>,
    ) -> Result<Page<Emploi>, AppError> {
        EmploiRepository::new(self.db)
            .find_page(filters, user_id, entreprise_id)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        patch: EmploiPatch,
    ) -> Result<PatchOutcome<Emploi>, AppError> {
        let repo = EmploiRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        patch.validate()?;
        ensure_not_empty(&patch)?;

        let changes = ChangeSet::detect(&existing, &patch)?;
        if changes.is_empty() {
            tracing::debug!(id, "emploi patch is a no-op");
            return Ok(PatchOutcome::Unchanged);
        }

        repo.patch(id, &patch, &changes).await?;

        let updated = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        Ok(PatchOutcome::Updated(updated))
    }

    /// Soft-deletes the link so the pair can be linked again.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !EmploiRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!(id, "emploi deleted");

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Emploi not found".to_string())
}
