use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserStatus,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::{
            user::{CreateUserParams, User, UserPatch},
            Page,
        },
        patch::{ensure_not_empty, ChangeSet, PatchOutcome},
        query::Filters,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - A required field is blank or the email is malformed
    /// - `Err(AppError::AlreadyExists)` - An active user already uses this email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        params.validate()?;

        let repo = UserRepository::new(self.db);
        let taken = taken_message(&params.email);

        if repo.email_taken(&params.email, None).await? {
            return Err(AppError::AlreadyExists(taken));
        }

        repo.create(params)
            .await
            .map_err(|e| e.conflict_on_unique(taken))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Looks a user up by email, ignoring case.
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn list(&self, filters: &Filters) -> Result<Page<User>, AppError> {
        UserRepository::new(self.db).find_page(filters).await
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// - `Ok(PatchOutcome::Unchanged)` - Every set field already matched
    /// - `Ok(PatchOutcome::Updated(User))` - The user after the write
    /// - `Err(AppError::NotFound)` - No active user with this id
    /// - `Err(AppError::Validation)` - Empty or invalid patch
    /// - `Err(AppError::AlreadyExists)` - The new email belongs to another active user
    pub async fn update(&self, id: i32, patch: UserPatch) -> Result<PatchOutcome<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        patch.validate()?;
        ensure_not_empty(&patch)?;

        let changes = ChangeSet::detect(&existing, &patch)?;
        if changes.is_empty() {
            tracing::debug!(id, "user patch is a no-op");
            return Ok(PatchOutcome::Unchanged);
        }

        let taken = patch.email.as_deref().map(taken_message).unwrap_or_default();
        if let Some(email) = patch.email.as_deref().filter(|_| changes.contains("email")) {
            if repo.email_taken(email, Some(id)).await? {
                return Err(AppError::AlreadyExists(taken));
            }
        }

        repo.patch(id, &patch, &changes)
            .await
            .map_err(|e| e.conflict_on_unique(taken))?;

        let updated = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        Ok(PatchOutcome::Updated(updated))
    }

    /// Sets the account status, used by the suspend and activate endpoints.
    ///
    /// Setting the status the user already has is not an error; the user is returned as is.
    pub async fn set_status(&self, id: i32, status: UserStatus) -> Result<User, AppError> {
        match self.update(id, UserPatch::status(status)).await? {
            PatchOutcome::Updated(user) => Ok(user),
            PatchOutcome::Unchanged => self.get_by_id(id).await,
        }
    }

    /// Soft-deletes a user. The stored row keeps its data and gains a deletion timestamp.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!(id, "user deleted");

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn taken_message(email: &str) -> String {
    format!("User with email '{}' already exists", email)
}
