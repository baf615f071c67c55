use sea_orm::DatabaseConnection;

use crate::server::{
    data::entreprise::EntrepriseRepository,
    error::AppError,
    model::{
        entreprise::{CreateEntrepriseParams, Entreprise, EntreprisePatch},
        Page,
    },
    patch::{ensure_not_empty, ChangeSet, PatchOutcome},
    query::Filters,
};

pub struct EntrepriseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntrepriseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new entreprise; names are unique.
    pub async fn create(&self, params: CreateEntrepriseParams) -> Result<Entreprise, AppError> {
        params.validate()?;

        let repo = EntrepriseRepository::new(self.db);
        let taken = taken_message(&params.name);

        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::AlreadyExists(taken));
        }

        repo.create(params)
            .await
            .map_err(|e| e.conflict_on_unique(taken))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Entreprise, AppError> {
        EntrepriseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Exact-name lookup.
    pub async fn get_by_name(&self, name: &str) -> Result<Entreprise, AppError> {
        EntrepriseRepository::new(self.db)
            .find_by_name(name.trim())
            .await?
            .ok_or_else(not_found)
    }

    pub async fn list(&self, filters: &Filters) -> Result<Page<Entreprise>, AppError> {
        EntrepriseRepository::new(self.db).find_page(filters).await
    }

    /// Applies a partial update; renaming onto another entreprise's name is a conflict.
    pub async fn update(
        &self,
        id: i32,
        patch: EntreprisePatch,
    ) -> Result<PatchOutcome<Entreprise>, AppError> {
        let repo = EntrepriseRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        patch.validate()?;
        ensure_not_empty(&patch)?;

        let changes = ChangeSet::detect(&existing, &patch)?;
        if changes.is_empty() {
            tracing::debug!(id, "entreprise patch is a no-op");
            return Ok(PatchOutcome::Unchanged);
        }

        let taken = patch.name.as_deref().map(taken_message).unwrap_or_default();
        if let Some(name) = patch.name.as_deref().filter(|_| changes.contains("name")) {
            if repo.name_taken(name, Some(id)).await? {
                return Err(AppError::AlreadyExists(taken));
            }
        }

        repo.patch(id, &patch, &changes)
            .await
            .map_err(|e| e.conflict_on_unique(taken))?;

        let updated = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        Ok(PatchOutcome::Updated(updated))
    }

    /// Permanently deletes an entreprise.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !EntrepriseRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!(id, "entreprise deleted");

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Entreprise not found".to_string())
}

fn taken_message(name: &str) -> String {
    format!("Entreprise with name '{}' already exists", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params(name: &str) -> CreateEntrepriseParams {
        CreateEntrepriseParams {
            name: name.to_string(),
            description: None,
            logo: None,
            website: None,
            location: Some("Paris".to_string()),
            created_by: 1,
        }
    }

    /// Tests the unchanged-then-changed scenario on a name.
    ///
    /// Expected: Unchanged for "Acme", Updated for "Acme Corp" with other fields kept
    #[tokio::test]
    async fn rename_scenario() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Entreprise)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = EntrepriseService::new(db);
        let created = service.create(params("Acme")).await?;

        let same = EntreprisePatch {
            name: Some("Acme".to_string()),
            ..Default::default()
        };
        assert_eq!(service.update(created.id, same).await?, PatchOutcome::Unchanged);

        let renamed = EntreprisePatch {
            name: Some("Acme Corp".to_string()),
            ..Default::default()
        };
        let PatchOutcome::Updated(entreprise) = service.update(created.id, renamed).await? else {
            panic!("expected an update");
        };

        assert_eq!(entreprise.name, "Acme Corp");
        assert_eq!(entreprise.location.as_deref(), Some("Paris"));
        assert_eq!(entreprise.created_at, created.created_at);
        assert!(entreprise.updated_at >= created.updated_at);

        Ok(())
    }

    /// Expected: Err(AlreadyExists) with the conflicting name
    #[tokio::test]
    async fn create_rejects_taken_name() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Entreprise)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::entreprise::EntrepriseFactory::new(db, 1)
            .name("Acme")
            .build()
            .await?;

        let result = EntrepriseService::new(db).create(params("Acme")).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "Entreprise with name 'Acme' already exists"
        );

        Ok(())
    }

    /// Expected: Err(NotFound) once the entreprise is hard-deleted
    #[tokio::test]
    async fn delete_then_lookup() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Entreprise)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let entreprise = factory::create_entreprise(db, 1).await?;
        let service = EntrepriseService::new(db);

        service.delete(entreprise.id).await?;

        assert!(matches!(
            service.get_by_name(&entreprise.name).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
