use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection};

use crate::server::{
    data::collection::CollectionRepository,
    error::AppError,
    model::{
        user::{CreateUserParams, User, UserPatch},
        Page,
    },
    patch::ChangeSet,
    query::Filters,
    schema::Collection,
};

use entity::user::{Column, Entity};

impl Collection for Entity {
    const NAME: &'static str = "User";
    const ID: Column = Column::Id;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const DELETED_AT: Option<Column> = Some(Column::DeletedAt);
    const SORT: Column = Column::CreatedAt;
    const ROLE: Option<Column> = Some(Column::Role);
    const STATUS: Option<Column> = Some(Column::Status);
    const EMAIL: Option<Column> = Some(Column::Email);
}

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
    collection: CollectionRepository<'a, Entity>,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            collection: CollectionRepository::new(db),
        }
    }

    /// Creates a new user with server-assigned timestamps.
    ///
    /// The email is expected to be lower-cased already.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            phone: ActiveValue::Set(params.phone),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds an active user by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        self.collection
            .find_by_id(id)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds an active user by email, ignoring case.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let Some(condition) = Self::email_condition(email)? else {
            return Ok(None);
        };

        self.collection
            .find_one(condition)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Checks whether an active user other than `exclude_id` already uses `email`.
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, AppError> {
        let Some(mut condition) = Self::email_condition(email)? else {
            return Ok(false);
        };
        if let Some(id) = exclude_id {
            condition = condition.add(Column::Id.ne(id));
        }

        Ok(self.collection.exists(condition).await?)
    }

    /// Active-user predicate for `email`, `None` when the email is blank.
    fn email_condition(email: &str) -> Result<Option<Condition>, AppError> {
        let filters = Filters::new(None, None, Some(email.to_string()), None, None);
        if filters.email.is_none() {
            return Ok(None);
        }

        filters.condition::<Entity>().map(Some)
    }

    /// Gets a page of active users matching the role/status/email filters.
    pub async fn find_page(&self, filters: &Filters) -> Result<Page<User>, AppError> {
        let condition = filters.condition::<Entity>()?;
        let (users, total) = self.collection.find_page(condition, filters).await?;

        Ok(Page {
            total,
            results: users
                .into_iter()
                .map(User::from_entity)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Writes the changed fields of `patch`.
    pub async fn patch(&self, id: i32, patch: &UserPatch, changes: &ChangeSet) -> Result<u64, AppError> {
        Ok(self.collection.patch(id, patch, changes).await?)
    }

    /// Soft-deletes a user.
    ///
    /// # Returns
    /// - `Ok(false)` - No active user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.collection.delete(id).await?)
    }
}
