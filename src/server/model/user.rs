//! User domain models and parameters.
//!
//! Users are soft-deleted and unique by (lower-cased) email among active accounts.
//! The password hash is accepted on creation but never loaded into the domain model.

use chrono::{DateTime, Utc};
use sea_orm::Value;
use serde::Serialize;

use crate::{
    model::user::{CreateUserDto, Role, UpdateUserDto, UserDto, UserStatus},
    server::{
        error::{internal::InternalError, AppError},
        patch::{PatchField, PatchSchema},
        util::validate::{require_email, require_text},
    },
};

use entity::user::Column;

/// Platform account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub full_name: String,
    /// Lower-cased.
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            role: self.role,
            phone: self.phone,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::Internal(UnknownEnumValue))` - Stored role or status is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or(InternalError::UnknownEnumValue {
            kind: "role",
            value: entity.role.clone(),
        })?;
        let status = UserStatus::parse(&entity.status).ok_or(InternalError::UnknownEnumValue {
            kind: "user status",
            value: entity.status.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            role,
            phone: entity.phone,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub full_name: String,
    /// Lower-cased by `from_dto`.
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: String,
    pub status: UserStatus,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email.trim().to_lowercase(),
            password_hash: dto.password_hash,
            role: dto.role,
            phone: dto.phone,
            status: dto.status.unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_text("fullName", &self.full_name)?;
        require_email(&self.email)?;
        require_text("passwordHash", &self.password_hash)?;
        require_text("phone", &self.phone)
    }
}

/// Partial update of a user; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Lower-cased by `from_dto` so a case-only difference is not a change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl UserPatch {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email.map(|email| email.trim().to_lowercase()),
            phone: dto.phone,
            role: dto.role,
            status: dto.status,
        }
    }

    /// Patch that only changes the account status.
    pub fn status(status: UserStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(full_name) = &self.full_name {
            require_text("fullName", full_name)?;
        }
        if let Some(email) = &self.email {
            require_email(email)?;
        }
        if let Some(phone) = &self.phone {
            require_text("phone", phone)?;
        }
        Ok(())
    }
}

impl PatchSchema for UserPatch {
    type Entity = entity::user::Entity;

    const FIELDS: &'static [PatchField<Self, Column>] = &[
        PatchField {
            name: "fullName",
            column: Column::FullName,
            value: |p| p.full_name.clone().map(Value::from),
        },
        PatchField {
            name: "email",
            column: Column::Email,
            value: |p| p.email.clone().map(Value::from),
        },
        PatchField {
            name: "phone",
            column: Column::Phone,
            value: |p| p.phone.clone().map(Value::from),
        },
        PatchField {
            name: "role",
            column: Column::Role,
            value: |p| p.role.map(|role| Value::from(role.as_str())),
        },
        PatchField {
            name: "status",
            column: Column::Status,
            value: |p| p.status.map(|status| Value::from(status.as_str())),
        },
    ];
}
